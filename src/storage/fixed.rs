//! Fixed-capacity vertex storage.

use super::{index_to_scalar, VertexStorage};
use crate::error::{GeometryError, Result};
use crate::primitives::Vertex2;
use num_traits::{Float, FloatConst};

/// Exactly `N` vertices held inline.
///
/// The vertex count is part of the type and never changes. Whole-sequence
/// replacement through [`FixedStorage::set_all`] takes an `[Vertex2<F>; N]`,
/// so a length mismatch does not compile:
///
/// ```compile_fail
/// use polygonum::storage::FixedStorage;
/// use polygonum::Vertex2;
///
/// let mut tri = FixedStorage::<f64, 3>::regular(1.0, 0.0);
/// tri.set_all([Vertex2::new(0.0, 0.0), Vertex2::new(1.0, 0.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStorage<F, const N: usize> {
    vertices: [Vertex2<F>; N],
}

impl<F: Float, const N: usize> FixedStorage<F, N> {
    /// Creates storage from explicit vertices.
    #[inline]
    pub fn new(vertices: [Vertex2<F>; N]) -> Self {
        Self { vertices }
    }

    /// Generates the vertices of a regular `N`-gon.
    ///
    /// Vertex `k` sits at angle `phase + k * 2π / N`, measured from the
    /// positive y axis towards the positive x axis, at distance `radius`
    /// from the origin. With a positive radius the vertices run clockwise.
    ///
    /// Fails to compile for `N == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use polygonum::storage::{FixedStorage, VertexStorage};
    ///
    /// let square = FixedStorage::<f64, 4>::regular(1.0, 0.0);
    /// let top = square.get(0).unwrap();
    /// assert!(top.x.abs() < 1e-12);
    /// assert!((top.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn regular(radius: F, phase: F) -> Self
    where
        F: FloatConst,
    {
        const { assert!(N > 0, "a regular polygon needs at least one vertex") };

        let step = F::TAU() / index_to_scalar(N);
        let vertices = std::array::from_fn(|k| {
            let angle = phase + step * index_to_scalar(k);
            Vertex2::new(radius * angle.sin(), radius * angle.cos())
        });

        Self { vertices }
    }

    /// Replaces every vertex.
    #[inline]
    pub fn set_all(&mut self, vertices: [Vertex2<F>; N]) {
        self.vertices = vertices;
    }

    /// Returns the vertex array.
    #[inline]
    pub fn as_array(&self) -> &[Vertex2<F>; N] {
        &self.vertices
    }

    /// Consumes the storage and returns the vertex array.
    #[inline]
    pub fn into_array(self) -> [Vertex2<F>; N] {
        self.vertices
    }
}

impl<F: Float + FloatConst, const N: usize> Default for FixedStorage<F, N> {
    /// The regular `N`-gon with unit radius and no phase offset.
    fn default() -> Self {
        Self::regular(F::one(), F::zero())
    }
}

impl<F: Float, const N: usize> VertexStorage for FixedStorage<F, N> {
    type Scalar = F;

    #[inline]
    fn as_slice(&self) -> &[Vertex2<F>] {
        &self.vertices
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Vertex2<F>] {
        &mut self.vertices
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn replace(&mut self, vertices: &[Vertex2<F>]) -> Result<()> {
        if vertices.len() != N {
            return Err(GeometryError::SizeMismatch {
                expected: N,
                actual: vertices.len(),
            });
        }
        self.vertices.copy_from_slice(vertices);
        Ok(())
    }
}

impl<F: Float, const N: usize> From<[Vertex2<F>; N]> for FixedStorage<F, N> {
    #[inline]
    fn from(vertices: [Vertex2<F>; N]) -> Self {
        Self::new(vertices)
    }
}

impl<F: Float, const N: usize> TryFrom<&[Vertex2<F>]> for FixedStorage<F, N> {
    type Error = GeometryError;

    fn try_from(vertices: &[Vertex2<F>]) -> Result<Self> {
        let vertices =
            <[Vertex2<F>; N]>::try_from(vertices).map_err(|_| GeometryError::SizeMismatch {
                expected: N,
                actual: vertices.len(),
            })?;
        Ok(Self { vertices })
    }
}

impl<F: Float, const N: usize> TryFrom<Vec<Vertex2<F>>> for FixedStorage<F, N> {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vertex2<F>>) -> Result<Self> {
        Self::try_from(vertices.as_slice())
    }
}
