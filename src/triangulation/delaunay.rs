//! Delaunay triangulation by incremental insertion with an x-sweep.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! 1. Sort the points by ascending x-coordinate (ties broken by original
//!    index, so the insertion order is fully deterministic).
//! 2. Seed the triangulation with a supertriangle enclosing all points.
//! 3. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the new point, then re-triangulate the boundary of the cavity
//!    against the point.
//! 4. Discard every triangle touching a supertriangle vertex.
//!
//! Because points arrive in ascending x-order, a triangle whose circumcircle
//! lies entirely left of the current point can never be invalidated again and
//! is finalized on the spot. This bounds the per-point scan to triangles the
//! sweep line has not yet passed.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, which is acceptable at the intended scale
//!   (tens of points)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use triangulum::{triangulate, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let indices = triangulate(&points).unwrap();
//!
//! // Every consecutive group of 3 indices is one triangle.
//! assert_eq!(indices.len() % 3, 0);
//! for &i in &indices {
//!     assert!(i < points.len());
//! }
//! ```

use std::cmp::Ordering;

use num_traits::Float;

use crate::bounds::Aabb2;
use crate::error::TriangulationError;
use crate::primitives::Point2;

/// Tolerance absorbing floating-point error in circumcircle tests (2⁻²⁰).
fn tolerance<F: Float>() -> F {
    F::from(1.0 / 1_048_576.0).unwrap()
}

/// A triangle tracked during the sweep: three vertex indices into the
/// working point array plus its precomputed circumcircle.
#[derive(Debug, Clone, Copy)]
struct SweepTriangle<F> {
    a: usize,
    b: usize,
    c: usize,
    center: Point2<F>,
    radius_squared: F,
}

/// An edge key normalized so the smaller vertex index comes first, letting
/// the two directed copies of a shared edge compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeKey(usize, usize);

impl EdgeKey {
    fn new(a: usize, b: usize) -> Self {
        if a < b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}

/// Computes the circumcircle of the triangle `(a, b, c)`.
///
/// Returns the circumcenter and the *squared* circumradius, found by
/// intersecting two perpendicular bisectors. When one adjacent vertex pair
/// shares a y-coordinate (within tolerance) the corresponding bisector is
/// vertical and its slope undefined; that pair is special-cased. When both
/// pairs do, the vertices are coincident or horizontally collinear and no
/// finite circumcircle exists.
///
/// # Errors
///
/// Returns [`TriangulationError::DegenerateTriangle`] if no finite
/// circumcircle passes through the three vertices.
///
/// # Example
///
/// ```
/// use triangulum::{circumcircle, Point2};
///
/// // Right triangle: the circumcircle is centered on the hypotenuse.
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// let (center, radius_squared) = circumcircle(a, b, c).unwrap();
/// assert_eq!(center, Point2::new(0.5, 0.5));
/// assert_eq!(radius_squared, 0.5);
/// ```
pub fn circumcircle<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> Result<(Point2<F>, F), TriangulationError> {
    let eps = tolerance::<F>();
    let two = F::from(2.0).unwrap();

    let dy_ab = (a.y - b.y).abs();
    let dy_bc = (b.y - c.y).abs();

    if dy_ab < eps && dy_bc < eps {
        return Err(TriangulationError::DegenerateTriangle);
    }

    let center = if dy_ab < eps {
        // Bisector of ab is vertical: the center's x is the midpoint of ab,
        // its y comes from the bc bisector.
        let m_bc = -((c.x - b.x) / (c.y - b.y));
        let mid_bc = b.midpoint(c);
        let x = (b.x + a.x) / two;
        Point2::new(x, m_bc * (x - mid_bc.x) + mid_bc.y)
    } else if dy_bc < eps {
        let m_ab = -((b.x - a.x) / (b.y - a.y));
        let mid_ab = a.midpoint(b);
        let x = (c.x + b.x) / two;
        Point2::new(x, m_ab * (x - mid_ab.x) + mid_ab.y)
    } else {
        let m_ab = -((b.x - a.x) / (b.y - a.y));
        let m_bc = -((c.x - b.x) / (c.y - b.y));
        let mid_ab = a.midpoint(b);
        let mid_bc = b.midpoint(c);
        let x = (m_ab * mid_ab.x - m_bc * mid_bc.x + mid_bc.y - mid_ab.y) / (m_ab - m_bc);
        // Solve for y on the bisector with the larger y-difference; it is
        // the better conditioned of the two.
        let y = if dy_ab > dy_bc {
            m_ab * (x - mid_ab.x) + mid_ab.y
        } else {
            m_bc * (x - mid_bc.x) + mid_bc.y
        };
        Point2::new(x, y)
    };

    Ok((center, b.distance_squared(center)))
}

/// Builds a sweep record for the triangle over three working-array indices.
fn circumscribed<F: Float>(
    points: &[Point2<F>],
    a: usize,
    b: usize,
    c: usize,
) -> Result<SweepTriangle<F>, TriangulationError> {
    let (center, radius_squared) = circumcircle(points[a], points[b], points[c])?;
    Ok(SweepTriangle {
        a,
        b,
        c,
        center,
        radius_squared,
    })
}

/// Builds the supertriangle enclosing a bounding box.
///
/// The three vertices are placed 20x the box's larger extent away from its
/// center, far enough that every input point is strictly inside with ample
/// numerical margin.
fn supertriangle<F: Float>(bbox: Aabb2<F>) -> [Point2<F>; 3] {
    let spread = F::from(20.0).unwrap();
    let dmax = bbox.width().max(bbox.height());
    let mid = bbox.center();

    [
        Point2::new(mid.x - spread * dmax, mid.y - dmax),
        Point2::new(mid.x, mid.y + spread * dmax),
        Point2::new(mid.x + spread * dmax, mid.y - dmax),
    ]
}

/// Cancels matched edge pairs from the cavity edge buffer.
///
/// An edge shared by two removed triangles appears twice (once per
/// direction) and is interior to the cavity; both occurrences are removed.
/// Edges appearing exactly once are the cavity boundary and survive.
///
/// Only the *first* matched pair of an edge is cancelled. A valid planar
/// point set never produces more than two copies of an edge, so the buffer
/// holds at most one pair per edge; with malformed input any extra copies
/// are deliberately left alone rather than asserted against.
fn cancel_paired_edges(edges: &mut Vec<(usize, usize)>) {
    let mut j = edges.len();
    while j > 0 {
        j -= 1;
        let key = EdgeKey::new(edges[j].0, edges[j].1);

        let mut i = j;
        while i > 0 {
            i -= 1;
            if EdgeKey::new(edges[i].0, edges[i].1) == key {
                edges.remove(j);
                edges.remove(i);
                j -= 1;
                break;
            }
        }
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns a flat list of vertex indices into `points`; every consecutive
/// group of 3 is one triangle. The output is deterministic: the same points
/// in the same order always produce the same index sequence.
///
/// Fewer than 3 points is not an error and yields an empty list.
///
/// # Errors
///
/// Returns [`TriangulationError::DegenerateTriangle`] if a circumcircle
/// computation encounters coincident or collinear vertices during the sweep.
/// The call fails as a whole; there is no partial result.
///
/// # Example
///
/// ```
/// use triangulum::{triangulate, Point2};
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let indices = triangulate(&points).unwrap();
/// assert_eq!(indices.len(), 4 * 3);
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Vec<usize>, TriangulationError> {
    let n = points.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    // Insertion order: ascending x, ties broken by ascending index.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| match points[i].x.partial_cmp(&points[j].x) {
        Some(Ordering::Less) => Ordering::Less,
        Some(Ordering::Greater) => Ordering::Greater,
        _ => i.cmp(&j),
    });

    // Working array: the caller's points followed by the three supertriangle
    // vertices at indices n, n+1, n+2.
    let bbox = points
        .iter()
        .skip(1)
        .fold(Aabb2::from_point(points[0]), |bbox, &p| {
            bbox.expand_to_include(p)
        });
    let mut working = points.to_vec();
    working.extend(supertriangle(bbox));

    let mut open = vec![circumscribed(&working, n, n + 1, n + 2)?];
    let mut closed: Vec<SweepTriangle<F>> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for &c in &order {
        let p = working[c];

        // Reverse scan so swap-removal never disturbs unvisited entries.
        for t in (0..open.len()).rev() {
            let tri = open[t];

            // The point is strictly right of this circumcircle. Every
            // remaining point has x >= p.x, so the triangle can never be
            // invalidated again: finalize it now.
            let dx = p.x - tri.center.x;
            if dx > F::zero() && dx * dx > tri.radius_squared {
                closed.push(tri);
                open.swap_remove(t);
                continue;
            }

            // Outside the circumcircle: untouched by this insertion.
            let dy = p.y - tri.center.y;
            if dx * dx + dy * dy - tri.radius_squared > tolerance() {
                continue;
            }

            // Inside: the triangle joins the insertion cavity.
            edges.push((tri.a, tri.b));
            edges.push((tri.b, tri.c));
            edges.push((tri.c, tri.a));
            open.swap_remove(t);
        }

        cancel_paired_edges(&mut edges);

        // Re-triangulate the cavity boundary against the new point.
        for &(a, b) in &edges {
            open.push(circumscribed(&working, a, b, c)?);
        }
        edges.clear();
    }

    // No more points: everything still open is final.
    closed.append(&mut open);

    let mut indices = Vec::new();
    for tri in &closed {
        if tri.a < n && tri.b < n && tri.c < n {
            indices.extend([tri.a, tri.b, tri.c]);
        }
    }
    Ok(indices)
}

/// Computes the Delaunay triangulation of richer records via an accessor.
///
/// Extracts a [`Point2`] from each item with `key`, saving the caller from
/// pre-flattening its data. Returned indices refer to positions in `items`.
///
/// # Errors
///
/// Same failure modes as [`triangulate`].
///
/// # Example
///
/// ```
/// use triangulum::{triangulate_with_key, Point2};
///
/// struct Site {
///     position: Point2<f64>,
///     #[allow(dead_code)]
///     weight: f64,
/// }
///
/// let sites = vec![
///     Site { position: Point2::new(0.0, 0.0), weight: 1.0 },
///     Site { position: Point2::new(1.0, 0.0), weight: 2.0 },
///     Site { position: Point2::new(0.5, 1.0), weight: 3.0 },
/// ];
///
/// let indices = triangulate_with_key(&sites, |s| s.position).unwrap();
/// assert_eq!(indices.len(), 3);
/// ```
pub fn triangulate_with_key<T, F, K>(
    items: &[T],
    key: K,
) -> Result<Vec<usize>, TriangulationError>
where
    F: Float,
    K: Fn(&T) -> Point2<F>,
{
    let points: Vec<Point2<F>> = items.iter().map(|item| key(item)).collect();
    triangulate(&points)
}
