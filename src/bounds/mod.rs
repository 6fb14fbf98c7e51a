//! Bounding volume computation.

mod aabb;

pub use aabb::Aabb2;
