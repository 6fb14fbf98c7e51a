//! Barycentric point-in-triangle query.

use num_traits::Float;

use crate::bounds::Aabb2;
use crate::primitives::Point2;

/// Tests whether a point lies inside a triangle, boundary inclusive.
///
/// Rejects early with a bounding-box test, then solves for barycentric-style
/// weights `(u, v)` via Cramer's rule on the triangle's edge vectors. The
/// point is contained iff `u >= 0`, `v >= 0` and `u + v <= 1`; the weights
/// are returned for reuse, e.g. for interpolating vertex attributes.
///
/// A degenerate (zero-area) triangle contains nothing.
///
/// # Example
///
/// ```
/// use triangulum::{triangle_contains, Point2};
///
/// let tri = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let (u, v) = triangle_contains(tri, Point2::new(1.0, 1.0)).unwrap();
/// assert_eq!((u, v), (0.25, 0.25));
///
/// assert!(triangle_contains(tri, Point2::new(5.0, 5.0)).is_none());
/// ```
pub fn triangle_contains<F: Float>(triangle: [Point2<F>; 3], p: Point2<F>) -> Option<(F, F)> {
    // Cheap rejection: strictly outside the triangle's bounding box on any
    // axis means not contained.
    let bbox = Aabb2::from_points(triangle)?;
    if !bbox.contains_point(p) {
        return None;
    }

    let [a, b, c] = triangle;
    let ab = b - a;
    let ac = c - a;

    let det = ab.cross(ac);
    if det == F::zero() {
        return None;
    }

    let ap = p - a;
    let u = (ac.y * ap.x - ac.x * ap.y) / det;
    let v = (ab.x * ap.y - ab.y * ap.x) / det;

    if u < F::zero() || v < F::zero() || u + v > F::one() {
        return None;
    }

    Some((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri() -> [Point2<f64>; 3] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_interior_point() {
        let (u, v) = triangle_contains(tri(), Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(u, 0.25);
        assert_eq!(v, 0.25);
        assert!(u >= 0.0 && v >= 0.0 && u + v <= 1.0);
    }

    #[test]
    fn test_point_outside() {
        assert!(triangle_contains(tri(), Point2::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_point_on_edge() {
        // Boundary is inclusive.
        let (u, v) = triangle_contains(tri(), Point2::new(2.0, 0.0)).unwrap();
        assert_eq!(u, 0.5);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_point_on_vertex() {
        let (u, v) = triangle_contains(tri(), Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(u, 0.0);
        assert_eq!(v, 0.0);

        let (u, v) = triangle_contains(tri(), Point2::new(4.0, 0.0)).unwrap();
        assert_eq!(u, 1.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_point_inside_bbox_but_outside_triangle() {
        // Survives the bounding-box rejection but fails the weight test.
        assert!(triangle_contains(tri(), Point2::new(3.0, 3.0)).is_none());
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        let flat = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(triangle_contains(flat, Point2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_weights_interpolate_position() {
        // p = a + u * (b - a) + v * (c - a) must reconstruct the query point.
        let t = [
            Point2::new(1.0_f64, 2.0),
            Point2::new(5.0, 1.0),
            Point2::new(2.0, 6.0),
        ];
        let p = Point2::new(2.5, 2.5);
        let (u, v) = triangle_contains(t, p).unwrap();

        let rebuilt = t[0] + (t[1] - t[0]) * u + (t[2] - t[0]) * v;
        assert_relative_eq!(rebuilt.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(rebuilt.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn test_f32() {
        let t = [
            Point2::new(0.0_f32, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        assert_eq!(
            triangle_contains(t, Point2::new(1.0, 1.0)),
            Some((0.25, 0.25))
        );
    }
}
