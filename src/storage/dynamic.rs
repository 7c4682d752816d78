//! Resizable vertex storage.

use super::VertexStorage;
use crate::error::Result;
use crate::primitives::Vertex2;
use num_traits::Float;

/// A vertex sequence whose length can change by whole replacement.
///
/// Suited to shapes whose approximation is refined at runtime, such as
/// circles or ellipses. Indexed writes are still bounds-checked against the
/// current count; only [`DynamicStorage::set_all`] and
/// [`VertexStorage::replace`] change the count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicStorage<F> {
    vertices: Vec<Vertex2<F>>,
}

impl<F: Float> DynamicStorage<F> {
    /// Creates storage from explicit vertices.
    #[inline]
    pub fn new(vertices: Vec<Vertex2<F>>) -> Self {
        Self { vertices }
    }

    /// Replaces every vertex, adopting the new count.
    #[inline]
    pub fn set_all(&mut self, vertices: Vec<Vertex2<F>>) {
        self.vertices = vertices;
    }

    /// Consumes the storage and returns the vertices.
    #[inline]
    pub fn into_vec(self) -> Vec<Vertex2<F>> {
        self.vertices
    }
}

impl<F: Float> VertexStorage for DynamicStorage<F> {
    type Scalar = F;

    #[inline]
    fn as_slice(&self) -> &[Vertex2<F>] {
        &self.vertices
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Vertex2<F>] {
        &mut self.vertices
    }

    fn replace(&mut self, vertices: &[Vertex2<F>]) -> Result<()> {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        Ok(())
    }
}

impl<F: Float> From<Vec<Vertex2<F>>> for DynamicStorage<F> {
    #[inline]
    fn from(vertices: Vec<Vertex2<F>>) -> Self {
        Self::new(vertices)
    }
}

impl<F: Float> FromIterator<Vertex2<F>> for DynamicStorage<F> {
    fn from_iter<I: IntoIterator<Item = Vertex2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    fn square() -> DynamicStorage<f64> {
        DynamicStorage::new(vec![
            Vertex2::new(-1.0, -1.0),
            Vertex2::new(1.0, -1.0),
            Vertex2::new(1.0, 1.0),
            Vertex2::new(-1.0, 1.0),
        ])
    }

    #[test]
    fn test_empty() {
        let storage: DynamicStorage<f64> = DynamicStorage::default();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
        assert_eq!(
            storage.get(0),
            Err(GeometryError::OutOfBounds { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut storage = square();
        storage.set(0, Vertex2::new(0.0, 17.0)).unwrap();
        assert_eq!(storage.get(0).unwrap(), Vertex2::new(0.0, 17.0));
        assert_eq!(storage.len(), 4);
    }

    #[test]
    fn test_index_equal_to_count_is_out_of_bounds() {
        let mut storage = square();
        assert_eq!(
            storage.get(4),
            Err(GeometryError::OutOfBounds { index: 4, count: 4 })
        );
        assert_eq!(
            storage.set(4, Vertex2::origin()),
            Err(GeometryError::OutOfBounds { index: 4, count: 4 })
        );
        assert_eq!(storage, square());
    }

    #[test]
    fn test_set_all_changes_count() {
        let mut storage = square();
        storage.set_all(vec![Vertex2::origin(); 2]);
        assert_eq!(storage.len(), 2);
        assert_eq!(
            storage.set(2, Vertex2::origin()),
            Err(GeometryError::OutOfBounds { index: 2, count: 2 })
        );

        storage.set_all(vec![Vertex2::origin(); 6]);
        assert_eq!(storage.len(), 6);
        assert!(storage.set(5, Vertex2::new(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_replace_accepts_any_length() {
        let mut storage = square();
        storage.replace(&[]).unwrap();
        assert!(storage.is_empty());

        let five = [Vertex2::new(1.0, 2.0); 5];
        storage.replace(&five).unwrap();
        assert_eq!(storage.as_slice(), &five);
    }

    #[test]
    fn test_collect() {
        let storage: DynamicStorage<f64> = (0..3)
            .map(|i| Vertex2::new(i as f64, 0.0))
            .collect();
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.into_vec()[2], Vertex2::new(2.0, 0.0));
    }
}
