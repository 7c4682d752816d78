//! Floating-point geometric primitives.

mod vertex2;

pub use vertex2::Vertex2;
