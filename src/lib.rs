//! triangulum - Planar Delaunay triangulation
//!
//! Computes a Delaunay triangulation of a 2D point set by incremental
//! insertion: points are swept in ascending x-order through a growing
//! triangulation seeded with an oversized supertriangle, and triangles whose
//! circumcircle the sweep has passed are finalized early. The crate also
//! provides a standalone barycentric point-in-triangle query.
//!
//! Intended for small point sets (tens of points, not millions): image
//! slicing, low-poly meshes, scattered-data interpolation.
//!
//! # Example
//!
//! ```
//! use triangulum::{triangulate, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let indices = triangulate(&points).unwrap();
//!
//! // Each consecutive group of 3 indices is one triangle.
//! assert_eq!(indices.len() % 3, 0);
//! for &i in &indices {
//!     assert!(i < points.len());
//! }
//! ```

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::TriangulationError;
pub use primitives::{Point2, Vec2};
pub use triangulation::{
    circumcircle, triangle_contains, triangulate, triangulate_with_key,
};
