//! Triangulation algorithms for point sets.
//!
//! This module provides the Delaunay triangulator and the standalone
//! point-in-triangle containment query.

mod contains;
mod delaunay;

pub use contains::triangle_contains;
pub use delaunay::{circumcircle, triangulate, triangulate_with_key};
