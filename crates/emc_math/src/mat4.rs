//! 4x4 Matrix for 3D affine transforms
//!
//! Storage is column-major: `cols[c][r]` is row `r` of column `c`, and the
//! flat index of that element is `c * 4 + r`. Translation lives in column 3,
//! so a point `(x, y, z, 1)` picks it up and a direction `(x, y, z, 0)` does
//! not.
//!
//! Composition follows the column-vector convention: `(a * b) * v` applies
//! `b` first, then `a`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::flat::impl_flat_access;
use crate::tolerance::impl_tolerance_eq;
use crate::{Vector3, Vector4};

/// 4x4 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4 {
    pub cols: [[f32; 4]; 4],
}

impl_flat_access!(Matrix4, 16);
impl_tolerance_eq!(Matrix4);

impl Matrix4 {
    pub const ZERO: Self = Self { cols: [[0.0; 4]; 4] };

    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from 16 values in column-major order
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m0: f32, m1: f32, m2: f32, m3: f32,
        m4: f32, m5: f32, m6: f32, m7: f32,
        m8: f32, m9: f32, m10: f32, m11: f32,
        m12: f32, m13: f32, m14: f32, m15: f32,
    ) -> Self {
        Self {
            cols: [
                [m0, m1, m2, m3],
                [m4, m5, m6, m7],
                [m8, m9, m10, m11],
                [m12, m13, m14, m15],
            ],
        }
    }

    /// Create a matrix from its four columns
    #[inline]
    pub fn from_cols(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self {
            cols: [c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()],
        }
    }

    /// Matrix with every component set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { cols: [[value; 4]; 4] }
    }

    #[inline]
    pub const fn make_identity() -> Self {
        Self::IDENTITY
    }

    /// Get a column as a vector. Panics if `col > 3`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector4 {
        Vector4::from(self.cols[col])
    }

    /// Swap rows and columns
    #[rustfmt::skip]
    pub fn transposed(&self) -> Self {
        let m = &self.cols;
        Self {
            cols: [
                [m[0][0], m[1][0], m[2][0], m[3][0]],
                [m[0][1], m[1][1], m[2][1], m[3][1]],
                [m[0][2], m[1][2], m[2][2], m[3][2]],
                [m[0][3], m[1][3], m[2][3], m[3][3]],
            ],
        }
    }

    /// Scale along x, y and z. The w diagonal stays 1.
    pub fn make_scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = x;
        m.cols[1][1] = y;
        m.cols[2][2] = z;
        m
    }

    #[inline]
    pub fn make_scale_vector(scale: Vector3) -> Self {
        Self::make_scale(scale.x, scale.y, scale.z)
    }

    /// Identity with the offset in column 3
    pub fn make_translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [x, y, z, 1.0];
        m
    }

    #[inline]
    pub fn make_translation_vector(offset: Vector3) -> Self {
        Self::make_translation(offset.x, offset.y, offset.z)
    }

    /// Rotation about the X axis; Y turns towards Z for positive `theta`
    #[inline]
    pub fn make_rotate_x(theta: f32) -> Self {
        Self::plane_rotation(theta, 1, 2)
    }

    /// Rotation about the Y axis; Z turns towards X for positive `theta`
    #[inline]
    pub fn make_rotate_y(theta: f32) -> Self {
        Self::plane_rotation(theta, 2, 0)
    }

    /// Rotation about the Z axis; X turns towards Y for positive `theta`
    #[inline]
    pub fn make_rotate_z(theta: f32) -> Self {
        Self::plane_rotation(theta, 0, 1)
    }

    /// `RotZ(z) * RotY(y) * RotX(x)`: applied to a vector, X rotates first,
    /// then Y, then Z. Angles are in radians.
    pub fn make_euler(x: f32, y: f32, z: f32) -> Self {
        Self::make_rotate_z(z) * Self::make_rotate_y(y) * Self::make_rotate_x(x)
    }

    #[inline]
    pub fn make_euler_vector(angles: Vector3) -> Self {
        Self::make_euler(angles.x, angles.y, angles.z)
    }

    /// Right-handed rotation by `theta` radians in the plane spanned by
    /// axes `p1` and `p2`, turning `p1` towards `p2`.
    fn plane_rotation(theta: f32, p1: usize, p2: usize) -> Self {
        let (sn, cs) = theta.sin_cos();

        let mut m = Self::IDENTITY;
        m.cols[p1][p1] = cs;
        m.cols[p2][p2] = cs;
        m.cols[p1][p2] = sn;
        m.cols[p2][p1] = -sn;

        m
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;

    /// Column `i` of the result is `self` applied to column `i` of `rhs`.
    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.cols[i][j] += self.cols[k][j] * rhs.cols[i][k];
                }
            }
        }

        result
    }
}

impl std::ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    /// `result[r] = sum over c of self[row r, col c] * v[c]`
    #[rustfmt::skip]
    fn mul(self, v: Vector4) -> Vector4 {
        let m = &self.cols;
        Vector4::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
            m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
        )
    }
}
