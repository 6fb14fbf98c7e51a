//! 2D point type for positions.

use crate::primitives::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a position.
///
/// Generic over floating-point types (`f32` or `f64`). Points and vectors
/// are distinct: subtracting two points yields a [`Vec2`], and adding a
/// [`Vec2`] to a point yields another point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates the origin point (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::from(2.0).unwrap();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Converts the point to a vector from the origin.
    #[inline]
    pub fn to_vec2(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_origin() {
        let p: Point2<f64> = Point2::origin();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_midpoint() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 2.0);
        let m = a.midpoint(b);
        assert_eq!(m.x, 2.0);
        assert_eq!(m.y, 1.0);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        let v = b - a;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_point_plus_vector() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        let v = crate::primitives::Vec2::new(3.0, 4.0);
        let q = p + v;
        assert_eq!(q.x, 4.0);
        assert_eq!(q.y, 6.0);

        let r = q - v;
        assert_eq!(r.x, 1.0);
        assert_eq!(r.y, 2.0);
    }
}
