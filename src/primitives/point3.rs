//! 3D point type.

use super::{Point2, Vec3};
use num_traits::Float;
use std::ops::Sub;

/// A 3D point with x, y, and z coordinates.
///
/// The hull builder treats `x` as the split axis, `y` as the second planar
/// axis and `z` as the elevation that separates the lower hull from the upper
/// hull.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Projects onto the xy plane (drops the elevation).
    #[inline]
    pub fn xy(self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Projects onto the xz plane.
    #[inline]
    pub fn xz(self) -> Point2<F> {
        Point2::new(self.x, self.z)
    }

    /// Mirrors the point through the `z = 0` plane.
    #[inline]
    pub fn reflect_z(self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: -self.z,
        }
    }

    /// Rotates the point by `angle` radians about the x axis, then the y axis,
    /// then the z axis.
    ///
    /// Each step uses the already rotated coordinates of the previous one.
    pub fn rotate(self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let Self { mut x, mut y, mut z } = self;

        let (new_z, new_y) = (z * cos + y * sin, -z * sin + y * cos);
        z = new_z;
        y = new_y;

        let (new_x, new_z) = (x * cos + z * sin, -x * sin + z * cos);
        x = new_x;
        z = new_z;

        let (new_x, new_y) = (x * cos + y * sin, -x * sin + y * cos);
        Self::new(new_x, new_y, z)
    }
}

// Point - Point = Vec3
impl<F: Float> Sub for Point3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
