//! Axis-aligned right triangle with closed-form queries.

use super::core::polygon_perimeter;
use super::shape::{Shape, Triangle};
use crate::error::{GeometryError, Result};
use crate::primitives::Vertex2;
use num_traits::Float;

/// A right triangle with the right angle at the origin.
///
/// Leg `a` runs along the x axis and leg `b` along the y axis, giving the
/// vertices `(0, 0)`, `(a, 0)`, `(0, b)`. The shape is defined by its legs,
/// so individual vertices cannot be moved.
///
/// # Example
///
/// ```
/// use polygonum::polygon::RightTriangle;
///
/// let tri = RightTriangle::new(3.0, 4.0);
/// assert_eq!(tri.area(), 6.0);
/// assert_eq!(tri.perimeter(), 12.0);
/// assert!(tri.is_convex());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle<F> {
    a: F,
    b: F,
}

impl<F: Float> RightTriangle<F> {
    /// Creates a right triangle from its legs.
    #[inline]
    pub fn new(a: F, b: F) -> Self {
        Self { a, b }
    }

    /// Returns the legs `(a, b)`.
    #[inline]
    pub fn legs(&self) -> (F, F) {
        (self.a, self.b)
    }

    /// Replaces both legs.
    #[inline]
    pub fn set_legs(&mut self, a: F, b: F) {
        self.a = a;
        self.b = b;
    }

    /// Returns the three vertices, right angle first.
    #[inline]
    pub fn vertices(&self) -> [Vertex2<F>; 3] {
        [
            Vertex2::origin(),
            Vertex2::new(self.a, F::zero()),
            Vertex2::new(F::zero(), self.b),
        ]
    }

    /// Returns the perimeter.
    #[inline]
    pub fn perimeter(&self) -> F {
        polygon_perimeter(&self.vertices())
    }

    /// Returns the signed area `a * b / 2`.
    ///
    /// A triangle cannot self-cross, so no validation is needed.
    #[inline]
    pub fn area(&self) -> F {
        self.a * self.b / (F::one() + F::one())
    }

    /// Always true.
    #[inline]
    pub fn is_convex(&self) -> bool {
        true
    }

    /// Always false.
    #[inline]
    pub fn has_self_crossing(&self) -> bool {
        false
    }

    /// Converts into a general triangle whose vertices can be edited.
    #[inline]
    pub fn to_triangle(&self) -> Triangle<F> {
        Triangle::from_array(self.vertices())
    }
}

impl<F: Float> Default for RightTriangle<F> {
    /// Unit legs.
    fn default() -> Self {
        Self::new(F::one(), F::one())
    }
}

impl<F: Float> From<RightTriangle<F>> for Triangle<F> {
    #[inline]
    fn from(tri: RightTriangle<F>) -> Self {
        tri.to_triangle()
    }
}

impl<F: Float> Shape<F> for RightTriangle<F> {
    fn vertex_count(&self) -> usize {
        3
    }

    fn vertex(&self, index: usize) -> Result<Vertex2<F>> {
        self.vertices()
            .get(index)
            .copied()
            .ok_or(GeometryError::OutOfBounds { index, count: 3 })
    }

    fn perimeter(&self) -> F {
        RightTriangle::perimeter(self)
    }

    fn area(&self, _validate: bool) -> Result<F> {
        Ok(RightTriangle::area(self))
    }

    fn is_convex(&self) -> bool {
        RightTriangle::is_convex(self)
    }

    fn has_self_crossing(&self) -> bool {
        RightTriangle::has_self_crossing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_unit_legs() {
        let tri: RightTriangle<f64> = RightTriangle::default();
        assert_eq!(tri.legs(), (1.0, 1.0));
        assert_relative_eq!(tri.area(), 0.5);
        assert_relative_eq!(tri.perimeter(), 2.0 + 2.0_f64.sqrt());
    }

    #[test]
    fn test_closed_form_matches_general_triangle() {
        let tri = RightTriangle::new(2.5_f64, 7.0);
        let general = tri.to_triangle();
        assert_relative_eq!(tri.area(), general.area(true).unwrap());
        assert_relative_eq!(tri.perimeter(), general.perimeter());
        assert_eq!(tri.is_convex(), general.is_convex());
        assert_eq!(tri.has_self_crossing(), general.has_self_crossing());
    }

    #[test]
    fn test_set_legs() {
        let mut tri = RightTriangle::new(1.0_f64, 1.0);
        tri.set_legs(6.0, 8.0);
        assert_relative_eq!(tri.area(), 24.0);
        assert_relative_eq!(tri.perimeter(), 24.0);
    }

    #[test]
    fn test_shape_interface() {
        let tri = RightTriangle::new(3.0_f64, 4.0);
        let shape: &dyn Shape<f64> = &tri;
        assert_eq!(shape.vertex_count(), 3);
        assert_eq!(shape.vertex(1), Ok(Vertex2::new(3.0, 0.0)));
        assert_eq!(
            shape.vertex(3),
            Err(GeometryError::OutOfBounds { index: 3, count: 3 })
        );
        assert_eq!(shape.area(true), Ok(6.0));
        assert!(shape.is_convex());
        assert!(!shape.has_self_crossing());
    }

    #[test]
    fn test_into_triangle_is_editable() {
        let mut tri: Triangle<f64> = RightTriangle::new(1.0, 1.0).into();
        tri.set_vertex(0, Vertex2::new(2.0, 2.0)).unwrap();
        assert!(tri.area(true).unwrap() < 0.0);
    }
}
