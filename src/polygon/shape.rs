//! Polygon type generic over vertex storage.

use super::core::{
    polygon_has_self_crossing, polygon_is_convex, polygon_perimeter, polygon_signed_area,
};
use crate::error::{GeometryError, Result};
use crate::primitives::Vertex2;
use crate::storage::{DynamicStorage, FixedStorage, VertexStorage};
use num_traits::{Float, FloatConst};

/// A closed polygon whose vertices live in storage `S`.
///
/// The last vertex connects back to the first. All queries read the
/// vertices without modifying them.
///
/// # Example
///
/// ```
/// use polygonum::polygon::DynamicPolygon;
/// use polygonum::{GeometryError, Vertex2};
///
/// let mut square = DynamicPolygon::from_vec(vec![
///     Vertex2::new(-1.0, -1.0),
///     Vertex2::new(1.0, -1.0),
///     Vertex2::new(1.0, 1.0),
///     Vertex2::new(-1.0, 1.0),
/// ]);
/// assert_eq!(square.area(true), Ok(4.0));
/// assert_eq!(square.perimeter(), 8.0);
/// assert!(square.is_convex());
///
/// square.set_vertex(0, Vertex2::new(0.0, 17.0)).unwrap();
/// assert!(square.has_self_crossing());
/// assert!(matches!(
///     square.area(true),
///     Err(GeometryError::InvalidGeometry { .. })
/// ));
/// assert!(square.area(false).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<S> {
    storage: S,
}

/// A polygon with exactly `N` vertices.
pub type NGon<F, const N: usize> = Polygon<FixedStorage<F, N>>;

/// A single vertex.
pub type Point<F> = NGon<F, 1>;

/// A segment, read as a closed two-vertex polygon.
pub type Line<F> = NGon<F, 2>;

/// A polygon with three vertices.
pub type Triangle<F> = NGon<F, 3>;

/// A polygon with four vertices.
pub type Quadrangle<F> = NGon<F, 4>;

/// A polygon whose vertex count can change.
pub type DynamicPolygon<F> = Polygon<DynamicStorage<F>>;

impl<S: VertexStorage> Polygon<S> {
    /// Wraps existing storage.
    #[inline]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the polygon and returns its storage.
    #[inline]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.storage.len()
    }

    /// Returns the vertices in boundary order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex2<S::Scalar>] {
        self.storage.as_slice()
    }

    /// Returns the vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Result<Vertex2<S::Scalar>> {
        self.storage.get(index)
    }

    /// Overwrites the vertex at `index`.
    #[inline]
    pub fn set_vertex(&mut self, index: usize, vertex: Vertex2<S::Scalar>) -> Result<()> {
        self.storage.set(index, vertex)
    }

    /// Replaces every vertex from a slice.
    ///
    /// Fixed-size polygons reject a slice of the wrong length with
    /// [`GeometryError::SizeMismatch`]. Prefer the typed `set_vertices` of
    /// [`NGon`] when the length is known at compile time.
    #[inline]
    pub fn try_set_vertices(&mut self, vertices: &[Vertex2<S::Scalar>]) -> Result<()> {
        self.storage.replace(vertices)
    }

    /// Reverses the winding order in place.
    pub fn reverse(&mut self) {
        self.storage.as_mut_slice().reverse();
    }

    /// Returns the perimeter, closing edge included.
    #[inline]
    pub fn perimeter(&self) -> S::Scalar {
        polygon_perimeter(self.vertices())
    }

    /// Returns the shoelace area without checking for self-crossing.
    ///
    /// Positive for counter-clockwise winding. Only meaningful as an area
    /// for simple polygons.
    #[inline]
    pub fn signed_area(&self) -> S::Scalar {
        polygon_signed_area(self.vertices())
    }

    /// Returns the signed area.
    ///
    /// With `validate` set, the polygon is first checked for self-crossing
    /// (an O(n²) test) and [`GeometryError::InvalidGeometry`] is returned if
    /// any two non-adjacent edges meet. Without it the shoelace value is
    /// returned as is.
    pub fn area(&self, validate: bool) -> Result<S::Scalar> {
        if validate && self.has_self_crossing() {
            return Err(GeometryError::SELF_CROSSING);
        }
        Ok(self.signed_area())
    }

    /// Tests if the polygon is convex. Always false below three vertices.
    #[inline]
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(self.vertices())
    }

    /// Tests if any two non-adjacent edges touch or cross.
    #[inline]
    pub fn has_self_crossing(&self) -> bool {
        polygon_has_self_crossing(self.vertices())
    }
}

impl<F: Float, const N: usize> NGon<F, N> {
    /// Creates a polygon from exactly `N` vertices.
    #[inline]
    pub fn from_array(vertices: [Vertex2<F>; N]) -> Self {
        Self::new(FixedStorage::new(vertices))
    }

    /// Creates a regular `N`-gon. See [`FixedStorage::regular`].
    ///
    /// ```
    /// use polygonum::polygon::NGon;
    ///
    /// let hexagon = NGon::<f64, 6>::regular(2.0, 0.0);
    /// assert!(hexagon.is_convex());
    /// assert!((hexagon.perimeter() - 12.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn regular(radius: F, phase: F) -> Self
    where
        F: FloatConst,
    {
        Self::new(FixedStorage::regular(radius, phase))
    }

    /// Replaces every vertex.
    #[inline]
    pub fn set_vertices(&mut self, vertices: [Vertex2<F>; N]) {
        self.storage.set_all(vertices);
    }
}

impl<F: Float> DynamicPolygon<F> {
    /// Creates a polygon from any number of vertices.
    #[inline]
    pub fn from_vec(vertices: Vec<Vertex2<F>>) -> Self {
        Self::new(DynamicStorage::new(vertices))
    }

    /// Replaces every vertex, adopting the new count.
    #[inline]
    pub fn set_vertices(&mut self, vertices: Vec<Vertex2<F>>) {
        self.storage.set_all(vertices);
    }
}

impl<F: Float, const N: usize> From<[Vertex2<F>; N]> for NGon<F, N> {
    #[inline]
    fn from(vertices: [Vertex2<F>; N]) -> Self {
        Self::from_array(vertices)
    }
}

impl<F: Float> From<Vec<Vertex2<F>>> for DynamicPolygon<F> {
    #[inline]
    fn from(vertices: Vec<Vertex2<F>>) -> Self {
        Self::from_vec(vertices)
    }
}

impl<F: Float> FromIterator<Vertex2<F>> for DynamicPolygon<F> {
    fn from_iter<I: IntoIterator<Item = Vertex2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read-only inspection shared by every shape.
///
/// Object safe, so shapes with different storage can be handled together:
///
/// ```
/// use polygonum::polygon::{DynamicPolygon, RightTriangle, Shape, Triangle};
/// use polygonum::Vertex2;
///
/// let shapes: Vec<Box<dyn Shape<f64>>> = vec![
///     Box::new(Triangle::regular(1.0, 0.0)),
///     Box::new(RightTriangle::new(3.0, 4.0)),
///     Box::new(DynamicPolygon::from_vec(vec![Vertex2::<f64>::origin(); 5])),
/// ];
/// let total: usize = shapes.iter().map(|s| s.vertex_count()).sum();
/// assert_eq!(total, 11);
/// ```
pub trait Shape<F: Float> {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the vertex at `index`.
    fn vertex(&self, index: usize) -> Result<Vertex2<F>>;

    /// Returns the perimeter.
    fn perimeter(&self) -> F;

    /// Returns the signed area, optionally rejecting self-crossing shapes.
    fn area(&self, validate: bool) -> Result<F>;

    /// Tests if the shape is convex.
    fn is_convex(&self) -> bool;

    /// Tests if any two non-adjacent edges touch or cross.
    fn has_self_crossing(&self) -> bool;
}

impl<S: VertexStorage> Shape<S::Scalar> for Polygon<S> {
    fn vertex_count(&self) -> usize {
        Polygon::vertex_count(self)
    }

    fn vertex(&self, index: usize) -> Result<Vertex2<S::Scalar>> {
        Polygon::vertex(self, index)
    }

    fn perimeter(&self) -> S::Scalar {
        Polygon::perimeter(self)
    }

    fn area(&self, validate: bool) -> Result<S::Scalar> {
        Polygon::area(self, validate)
    }

    fn is_convex(&self) -> bool {
        Polygon::is_convex(self)
    }

    fn has_self_crossing(&self) -> bool {
        Polygon::has_self_crossing(self)
    }
}
