//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::flat::impl_flat_access;
use crate::tolerance::impl_tolerance_eq;
use crate::Vector4;

/// 3D Vector with x, y, z components
///
/// `==` compares with an absolute tolerance of `5e-6` per component.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_flat_access!(Vector3, 3);
impl_tolerance_eq!(Vector3);

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length in place. A zero-length vector is left as is.
    #[inline]
    pub fn normalise(&mut self) {
        *self = self.normalised();
    }

    /// Unit-length copy, or [`Vector3::ZERO`] if the length is exactly zero
    #[inline]
    pub fn normalised(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        self / mag
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Append a fourth component
    #[inline]
    pub fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Convert each component from degrees to radians
    #[inline]
    pub fn to_radians(self) -> Self {
        Self::new(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl std::ops::MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let v = Vector3::default();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        // 4 + 10 + 18
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).magnitude(), 7.0);
    }

    #[test]
    fn test_normalised() {
        let n = Vector3::new(0.0, 4.0, 3.0).normalised();
        assert_eq!(n, Vector3::new(0.0, 0.8, 0.6));
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalise_zero_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalise();
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(Vector3::ZERO.normalised().to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalise_in_place() {
        let mut v = Vector3::new(10.0, 0.0, 0.0);
        v.normalise();
        assert_eq!(v, Vector3::X);
    }

    #[test]
    fn test_cross_axes() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v += Vector3::new(1.0, 2.0, 3.0);
        v -= Vector3::new(0.0, 1.0, 2.0);
        v *= 3.0;
        v /= 2.0;
        assert_eq!(v, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_index() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_tolerance_equality() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.000_001));
        assert_ne!(a, Vector3::new(1.0, 2.0, 3.001));
    }

    #[test]
    fn test_display() {
        let v = Vector3::new(1.0, -2.5, 3.0);
        assert_eq!(v.to_string(), "1, -2.5, 3");
        assert_eq!(format!("{:.2}", v), "1.00, -2.50, 3.00");
    }

    #[test]
    fn test_slice_conversion() {
        let full: [f32; 3] = [1.0, 2.0, 3.0];
        let v = Vector3::try_from(&full[..]).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let err = Vector3::try_from(&full[..2]).unwrap_err();
        assert_eq!(err.expected, 3);
        assert_eq!(err.found, 2);
    }

    #[test]
    fn test_extend() {
        let v = Vector3::new(1.0, 2.0, 3.0).extend(1.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
    }
}
