//! Error types for polygon operations.

use thiserror::Error;

/// Errors that can occur when accessing or inspecting a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A vertex index was not below the current vertex count.
    #[error("vertex index {index} out of bounds for polygon with {count} vertices")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The vertex count at the time of the request.
        count: usize,
    },

    /// The vertices do not describe a shape the query can handle.
    #[error("{reason}")]
    InvalidGeometry {
        /// Human-readable cause, e.g. `"self crossing"`.
        reason: &'static str,
    },

    /// A bulk replacement did not match a fixed vertex capacity.
    #[error("expected {expected} vertices, got {actual}")]
    SizeMismatch {
        /// The fixed capacity.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
}

impl GeometryError {
    /// The error returned by validated area queries on self-crossing polygons.
    pub(crate) const SELF_CROSSING: Self = Self::InvalidGeometry {
        reason: "self crossing",
    };
}

/// Result alias for fallible polygon operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
