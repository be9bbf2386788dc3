//! 2D point type.

use super::{Point3, Vec2};
use num_traits::Float;
use std::ops::Sub;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
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

    /// Lifts the point onto the paraboloid `z = x² + y²`.
    ///
    /// The lower convex hull of lifted points projects back onto the
    /// Delaunay triangulation of the original points.
    #[inline]
    pub fn lift(self) -> Point3<F> {
        Point3::new(self.x, self.y, self.x * self.x + self.y * self.y)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
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
    fn test_lift() {
        let p: Point2<f64> = Point2::new(3.0, -4.0);
        let lifted = p.lift();
        assert_eq!(lifted.x, 3.0);
        assert_eq!(lifted.y, -4.0);
        assert_eq!(lifted.z, 25.0);
    }

    #[test]
    fn test_point_sub_point() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        let v = b - a;
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }
}
