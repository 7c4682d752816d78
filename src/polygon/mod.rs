//! Polygons and their inspection queries.
//!
//! This module provides:
//! - [`Polygon`], generic over fixed or dynamic vertex storage, with aliases
//!   for common vertex counts
//! - Perimeter and shoelace area, optionally rejecting self-crossing input
//! - Convexity and self-crossing tests
//! - [`RightTriangle`], whose queries have closed forms
//!
//! # Example
//!
//! ```
//! use polygonum::polygon::{NGon, Quadrangle};
//! use polygonum::Vertex2;
//!
//! let square = Quadrangle::from_array([
//!     Vertex2::new(-1.0, -1.0),
//!     Vertex2::new(1.0, -1.0),
//!     Vertex2::new(1.0, 1.0),
//!     Vertex2::new(-1.0, 1.0),
//! ]);
//! assert_eq!(square.area(true), Ok(4.0));
//!
//! let octagon = NGon::<f64, 8>::regular(1.0, 0.0);
//! assert!(octagon.is_convex());
//! assert!(!octagon.has_self_crossing());
//! ```

mod core;
mod right_triangle;
mod shape;

pub use self::core::{
    polygon_has_self_crossing, polygon_is_convex, polygon_perimeter, polygon_signed_area,
    segments_intersect,
};
pub use right_triangle::RightTriangle;
pub use shape::{DynamicPolygon, Line, NGon, Point, Polygon, Quadrangle, Shape, Triangle};
