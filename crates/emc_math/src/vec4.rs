//! 4D Vector type
//!
//! Used as a homogeneous coordinate for [`Matrix4`](crate::Matrix4)
//! transforms: `w = 1` for points, `w = 0` for directions.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::flat::impl_flat_access;
use crate::tolerance::impl_tolerance_eq;
use crate::Vector3;

/// 4D Vector with x, y, z, w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_flat_access!(Vector4, 4);
impl_tolerance_eq!(Vector4);

impl Vector4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Dot product of the x, y, z components.
    ///
    /// `w` does not take part. Existing transform code relies on this, so it
    /// stays a three-component product even though `magnitude` uses all four.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length over all four components
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length in place. See [`Vector4::normalised`].
    #[inline]
    pub fn normalise(&mut self) {
        *self = self.normalised();
    }

    /// Unit-length copy.
    ///
    /// If x, y and z are all zero the vector has no spatial direction: the
    /// result is `(0, 0, 0, w)` with `w` carried over unchanged.
    #[inline]
    pub fn normalised(self) -> Self {
        if self.xyz().magnitude() == 0.0 {
            return Self::new(0.0, 0.0, 0.0, self.w);
        }
        self / self.magnitude()
    }

    /// Cross product of the x, y, z parts. The result has `w = 0`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        self.xyz().cross(other.xyz()).extend(0.0)
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, vector: Vector4) -> Vector4 {
        vector * self
    }
}

impl std::ops::MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl std::ops::Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl std::ops::DivAssign<f32> for Vector4 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self.w /= scalar;
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot_ignores_w() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 5 + 12 + 21, w pair not included
        assert_eq!(a.dot(b), 38.0);
    }

    #[test]
    fn test_magnitude_includes_w() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.magnitude(), 2.0);
    }

    #[test]
    fn test_normalised() {
        let n = Vector4::new(2.0, 0.0, 0.0, 2.0).normalised();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_eq!(n, Vector4::new(h, 0.0, 0.0, h));
    }

    #[test]
    fn test_normalised_keeps_w_without_direction() {
        let v = Vector4::new(0.0, 0.0, 0.0, 7.0);
        assert_eq!(v.normalised(), v);

        let mut m = v;
        m.normalise();
        assert_eq!(m.to_array(), [0.0, 0.0, 0.0, 7.0]);

        assert_eq!(Vector4::ZERO.normalised().to_array(), [0.0; 4]);
    }

    #[test]
    fn test_cross_zeroes_w() {
        let a = Vector4::new(1.0, 0.0, 0.0, 5.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 9.0);
        assert_eq!(a.cross(b), Vector4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_add_sub() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vector4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul_div_scalar() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 4.0, Vector4::new(0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn test_neg() {
        let v = Vector4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vector4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_xyz() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_index_order() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([v[0], v[1], v[2], v[3]], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0).to_string(), "1, 2, 3, 4");
    }
}
