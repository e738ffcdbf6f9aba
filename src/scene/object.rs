//! Object3D - a placed, rotated and scaled scene object

use emc_math::{Matrix4, Vector3};

use crate::config::ObjectConfig;

/// A scene object with a position, Euler rotation (degrees) and scale
#[derive(Clone, Debug)]
pub struct Object3D {
    pub name: String,
    pub position: Vector3,
    /// Euler angles in degrees
    pub rotation: Vector3,
    pub scale: Vector3,
    /// Degrees per second added to `rotation` on each update
    pub spin: Vector3,
}

impl Object3D {
    /// Create an object at the origin with unit scale
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::new(1.0, 1.0, 1.0),
            spin: Vector3::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, degrees: Vector3) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, degrees_per_second: Vector3) -> Self {
        self.spin = degrees_per_second;
        self
    }

    /// Advance the rotation by `spin * dt`, wrapping each angle into [0, 360)
    pub fn update(&mut self, dt: f32) {
        let r = self.rotation + self.spin * dt;
        self.rotation = Vector3::new(
            r.x.rem_euclid(360.0),
            r.y.rem_euclid(360.0),
            r.z.rem_euclid(360.0),
        );
    }

    /// Local-to-world transform: `T * Rx * Ry * Rz * S`
    ///
    /// Applied to a point this scales first, then rotates about Z, Y and X in
    /// that order, then translates.
    pub fn model_matrix(&self) -> Matrix4 {
        let r = self.rotation.to_radians();
        Matrix4::make_translation_vector(self.position)
            * Matrix4::make_rotate_x(r.x)
            * Matrix4::make_rotate_y(r.y)
            * Matrix4::make_rotate_z(r.z)
            * Matrix4::make_scale_vector(self.scale)
    }
}

impl From<&ObjectConfig> for Object3D {
    fn from(config: &ObjectConfig) -> Self {
        Self::new(config.name.clone())
            .with_position(config.position.into())
            .with_rotation(config.rotation.into())
            .with_scale(config.scale.into())
            .with_spin(config.spin.into())
    }
}
