//! Vertex storage for polygons.
//!
//! A polygon's vertices live either in a fixed-capacity array whose length is
//! part of the type, or in a resizable vector. Both implement
//! [`VertexStorage`], which is all the geometry queries need.
//!
//! # Example
//!
//! ```
//! use polygonum::storage::{DynamicStorage, FixedStorage, VertexStorage};
//! use polygonum::{GeometryError, Vertex2};
//!
//! let mut fixed = FixedStorage::new([
//!     Vertex2::new(0.0, 0.0),
//!     Vertex2::new(1.0, 0.0),
//!     Vertex2::new(0.0, 1.0),
//! ]);
//! assert_eq!(
//!     fixed.replace(&[Vertex2::new(0.0, 0.0)]),
//!     Err(GeometryError::SizeMismatch { expected: 3, actual: 1 })
//! );
//!
//! let mut dynamic = DynamicStorage::new(fixed.as_slice().to_vec());
//! dynamic.replace(&[Vertex2::new(0.0, 0.0)]).unwrap();
//! assert_eq!(dynamic.len(), 1);
//! ```

mod dynamic;
mod fixed;

pub use dynamic::DynamicStorage;
pub use fixed::FixedStorage;

use crate::error::{GeometryError, Result};
use crate::primitives::Vertex2;
use num_traits::Float;

/// Ordered storage for the vertices of a closed polygon.
///
/// Implementors only provide slice access and bulk replacement; indexed
/// access is bounds-checked here so every storage reports the same errors.
pub trait VertexStorage {
    /// Coordinate type.
    type Scalar: Float;

    /// Returns the vertices in boundary order.
    fn as_slice(&self) -> &[Vertex2<Self::Scalar>];

    /// Returns the vertices in boundary order, mutably.
    ///
    /// The length of the slice cannot change through this view.
    fn as_mut_slice(&mut self) -> &mut [Vertex2<Self::Scalar>];

    /// Replaces every vertex at once.
    ///
    /// Storages with a fixed capacity return [`GeometryError::SizeMismatch`]
    /// and leave their contents untouched when the lengths differ.
    fn replace(&mut self, vertices: &[Vertex2<Self::Scalar>]) -> Result<()>;

    /// Returns the number of vertices.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if there are no vertices.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the vertex at `index`.
    fn get(&self, index: usize) -> Result<Vertex2<Self::Scalar>> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(GeometryError::OutOfBounds {
                index,
                count: self.len(),
            })
    }

    /// Overwrites the vertex at `index`.
    fn set(&mut self, index: usize, vertex: Vertex2<Self::Scalar>) -> Result<()> {
        let count = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(GeometryError::OutOfBounds { index, count })?;
        *slot = vertex;
        Ok(())
    }
}

/// Converts a vertex index or count to a coordinate value.
#[inline]
pub(crate) fn index_to_scalar<F: Float>(i: usize) -> F {
    F::from(i).unwrap()
}
