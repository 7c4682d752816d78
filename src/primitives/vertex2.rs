//! 2D vertex type.

use num_traits::Float;
use std::fmt;

/// A point on a polygon boundary.
///
/// Generic over floating-point types (`f32` or `f64`). Integer coordinates
/// are not supported; every constructor requires `F: Float`.
///
/// ```compile_fail
/// use polygonum::Vertex2;
///
/// let v = Vertex2::new(1_i32, 2_i32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vertex2<F> {
    /// Creates a new vertex.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the squared Euclidean distance to another vertex.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the Euclidean distance to another vertex.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: Float> From<[F; 2]> for Vertex2<F> {
    #[inline]
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F)> for Vertex2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Vertex2<F>> for [F; 2] {
    #[inline]
    fn from(v: Vertex2<F>) -> Self {
        [v.x, v.y]
    }
}

impl<F: fmt::Display> fmt::Display for Vertex2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
