//! Polygon inspection over plain vertex slices.
//!
//! Vertices are read as a closed cycle: vertex `i` connects to vertex
//! `(i + 1) % n`. None of these functions allocate or mutate.

use crate::primitives::Vertex2;
use num_traits::Float;

/// Returns the perimeter of a closed polygon.
///
/// Sums the length of every edge including the closing edge from the last
/// vertex back to the first. Zero for fewer than two vertices.
pub fn polygon_perimeter<F: Float>(vertices: &[Vertex2<F>]) -> F {
    if vertices.len() < 2 {
        return F::zero();
    }

    let n = vertices.len();
    let mut perimeter = F::zero();

    for i in 0..n {
        let j = (i + 1) % n;
        perimeter = perimeter + vertices[i].distance(vertices[j]);
    }

    perimeter
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise winding.
/// The magnitude is the enclosed area only when the polygon is simple.
/// Zero for fewer than three vertices.
pub fn polygon_signed_area<F: Float>(vertices: &[Vertex2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let mut area = F::zero();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Tests if a polygon is convex.
///
/// Every consecutive triple `(i, i + 1, i + 2)` is classified by the sign of
/// its oriented area as negative or non-negative. The polygon is convex when
/// exactly one class occurs, so a collinear triple groups with the positive
/// turns.
///
/// Fewer than three vertices never form a convex polygon.
pub fn polygon_is_convex<F: Float>(vertices: &[Vertex2<F>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut negative = false;
    let mut non_negative = false;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let turn = oriented_triangle_area(a, b, c);
        if turn < F::zero() {
            negative = true;
        } else {
            non_negative = true;
        }
    }

    negative ^ non_negative
}

/// Checks whether any two non-adjacent edges of a polygon touch or cross.
///
/// Every pair of edges that do not share a vertex is tested, the closing
/// edge included. This is O(n²) in the vertex count. Polygons with fewer
/// than four vertices have no such pairs and never self-cross.
pub fn polygon_has_self_crossing<F: Float>(vertices: &[Vertex2<F>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let a1 = vertices[i];
        let a2 = vertices[(i + 1) % n];

        for j in (i + 2)..n {
            let j_next = (j + 1) % n;
            // The closing edge shares vertex 0 with edge 0.
            if j_next == i {
                continue;
            }

            if segments_intersect(a1, a2, vertices[j], vertices[j_next]) {
                return true;
            }
        }
    }

    false
}

/// Tests whether segment `ab` and segment `cd` have a point in common.
///
/// Touching endpoints and collinear overlap both count as intersecting.
///
/// # Example
///
/// ```
/// use polygonum::polygon::segments_intersect;
/// use polygonum::Vertex2;
///
/// let a = Vertex2::new(0.0, 0.0);
/// let b = Vertex2::new(2.0, 2.0);
/// assert!(segments_intersect(a, b, Vertex2::new(0.0, 2.0), Vertex2::new(2.0, 0.0)));
/// assert!(!segments_intersect(a, b, Vertex2::new(3.0, 0.0), Vertex2::new(4.0, 1.0)));
/// ```
pub fn segments_intersect<F: Float>(
    a: Vertex2<F>,
    b: Vertex2<F>,
    c: Vertex2<F>,
    d: Vertex2<F>,
) -> bool {
    ranges_overlap(a.x, b.x, c.x, d.x)
        && ranges_overlap(a.y, b.y, c.y, d.y)
        && oriented_triangle_area(a, b, c) * oriented_triangle_area(a, b, d) <= F::zero()
        && oriented_triangle_area(c, d, a) * oriented_triangle_area(c, d, b) <= F::zero()
}

/// Twice the signed area of triangle `abc`.
///
/// Positive when `c` lies to the left of the directed line `ab`.
#[inline]
fn oriented_triangle_area<F: Float>(a: Vertex2<F>, b: Vertex2<F>, c: Vertex2<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether the intervals spanned by `(a, b)` and `(c, d)` overlap.
#[inline]
fn ranges_overlap<F: Float>(a: F, b: F, c: F, d: F) -> bool {
    a.min(b).max(c.min(d)) <= a.max(b).min(c.max(d))
}
