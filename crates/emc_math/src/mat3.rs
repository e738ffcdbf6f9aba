//! 3x3 Matrix
//!
//! Same column-major layout as [`Matrix4`](crate::Matrix4): flat index
//! `c * 3 + r`. Besides pure 3D rotation and scale, a `Matrix3` doubles as a
//! 2D affine transform, with the translation carried in column 2.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::flat::impl_flat_access;
use crate::tolerance::impl_tolerance_eq;
use crate::Vector3;

/// 3x3 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix3 {
    pub cols: [[f32; 3]; 3],
}

impl_flat_access!(Matrix3, 9);
impl_tolerance_eq!(Matrix3);

impl Matrix3 {
    pub const ZERO: Self = Self { cols: [[0.0; 3]; 3] };

    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from 9 values in column-major order
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m0: f32, m1: f32, m2: f32,
        m3: f32, m4: f32, m5: f32,
        m6: f32, m7: f32, m8: f32,
    ) -> Self {
        Self {
            cols: [
                [m0, m1, m2],
                [m3, m4, m5],
                [m6, m7, m8],
            ],
        }
    }

    #[inline]
    pub fn from_cols(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self {
            cols: [c0.to_array(), c1.to_array(), c2.to_array()],
        }
    }

    #[inline]
    pub const fn make_identity() -> Self {
        Self::IDENTITY
    }

    /// Get a column as a vector. Panics if `col > 2`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::from(self.cols[col])
    }

    #[rustfmt::skip]
    pub fn transposed(&self) -> Self {
        let m = &self.cols;
        Self {
            cols: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

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

    /// 2D scale; the third diagonal entry stays 1
    #[inline]
    pub fn make_scale_2d(x: f32, y: f32) -> Self {
        Self::make_scale(x, y, 1.0)
    }

    /// Column 2 is replaced outright by `(x, y, z)`, including the diagonal
    /// slot. Pass `z = 1` (or use [`Matrix3::make_translation_2d`]) for a
    /// 2D affine translation.
    pub fn make_translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[2] = [x, y, z];
        m
    }

    #[inline]
    pub fn make_translation_vector(offset: Vector3) -> Self {
        Self::make_translation(offset.x, offset.y, offset.z)
    }

    /// Translation of 2D points `(x, y, 1)`
    #[inline]
    pub fn make_translation_2d(x: f32, y: f32) -> Self {
        Self::make_translation(x, y, 1.0)
    }

    #[inline]
    pub fn make_rotate_x(theta: f32) -> Self {
        Self::plane_rotation(theta, 1, 2)
    }

    #[inline]
    pub fn make_rotate_y(theta: f32) -> Self {
        Self::plane_rotation(theta, 2, 0)
    }

    /// Also the 2D rotation of the xy plane
    #[inline]
    pub fn make_rotate_z(theta: f32) -> Self {
        Self::plane_rotation(theta, 0, 1)
    }

    /// `RotZ(z) * RotY(y) * RotX(x)`, angles in radians
    pub fn make_euler(x: f32, y: f32, z: f32) -> Self {
        Self::make_rotate_z(z) * Self::make_rotate_y(y) * Self::make_rotate_x(x)
    }

    #[inline]
    pub fn make_euler_vector(angles: Vector3) -> Self {
        Self::make_euler(angles.x, angles.y, angles.z)
    }

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

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;

        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result.cols[i][j] += self.cols[k][j] * rhs.cols[i][k];
                }
            }
        }

        result
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    #[rustfmt::skip]
    fn mul(self, v: Vector3) -> Vector3 {
        let m = &self.cols;
        Vector3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }
}
