//! polygonum - Polygon inspection for 2D vertex sequences
//!
//! Perimeter, signed area, convexity and self-crossing for closed polygons,
//! generic over the float type and over how vertices are stored: a
//! fixed-size array whose length is part of the type, or a resizable vector.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod storage;

pub use error::{GeometryError, Result};
pub use polygon::{DynamicPolygon, NGon, Polygon, RightTriangle, Shape};
pub use primitives::Vertex2;
pub use storage::{DynamicStorage, FixedStorage, VertexStorage};
