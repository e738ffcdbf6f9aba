//! Frame preparation
//!
//! Turns the scene into the raw data a graphics backend consumes:
//! - clear colour as normalised floats
//! - one column-major `[f32; 16]` model matrix per object
//!
//! Nothing here talks to a GPU.

use emc_math::Colour;

use crate::config::RenderingConfig;
use crate::scene::Scene;

/// Uniform data for one object
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectUniforms {
    pub name: String,
    /// Model matrix, column-major
    pub model: [f32; 16],
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameData {
    /// RGBA in [0, 1]
    pub clear_colour: [f32; 4],
    pub objects: Vec<ObjectUniforms>,
}

/// Convert a packed colour to the float RGBA a clear call expects.
///
/// Every channel, alpha included, is divided by 255.
pub fn clear_colour_floats(colour: Colour) -> [f32; 4] {
    colour.to_bytes().map(|channel| f32::from(channel) / 255.0)
}

/// Prepares per-frame render data
pub struct RenderSystem {
    clear_colour: Colour,
    frames_prepared: u64,
}

impl RenderSystem {
    pub fn new(clear_colour: Colour) -> Self {
        Self {
            clear_colour,
            frames_prepared: 0,
        }
    }

    /// Create render system from config
    pub fn from_config(config: &RenderingConfig) -> Self {
        Self::new(Colour::from(config.clear_colour))
    }

    pub fn clear_colour(&self) -> Colour {
        self.clear_colour
    }

    pub fn set_clear_colour(&mut self, colour: Colour) {
        self.clear_colour = colour;
    }

    pub fn frames_prepared(&self) -> u64 {
        self.frames_prepared
    }

    /// Build the frame data for the current state of `scene`
    pub fn prepare_frame(&mut self, scene: &Scene) -> FrameData {
        let objects: Vec<ObjectUniforms> = scene
            .objects()
            .iter()
            .map(|object| ObjectUniforms {
                name: object.name.clone(),
                model: object.model_matrix().to_array(),
            })
            .collect();

        self.frames_prepared += 1;
        log::debug!(
            "Prepared frame {} with {} objects",
            self.frames_prepared,
            objects.len()
        );

        FrameData {
            clear_colour: clear_colour_floats(self.clear_colour),
            objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Object3D;
    use emc_math::Vector3;

    #[test]
    fn test_clear_colour_normalised() {
        assert_eq!(clear_colour_floats(Colour::WHITE), [1.0; 4]);
        assert_eq!(clear_colour_floats(Colour::BLACK), [0.0, 0.0, 0.0, 1.0]);

        let c = clear_colour_floats(Colour::new(51, 102, 0, 255));
        assert!((c[0] - 0.2).abs() < 1e-6);
        assert!((c[1] - 0.4).abs() < 1e-6);
        assert_eq!(c[2], 0.0);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_prepare_frame_exports_column_major() {
        let scene = Scene::new()
            .add_object(Object3D::new("moved").with_position(Vector3::new(1.0, 2.0, 3.0)));
        let mut render = RenderSystem::new(Colour::BLACK);

        let frame = render.prepare_frame(&scene);
        assert_eq!(frame.objects.len(), 1);
        assert_eq!(frame.objects[0].name, "moved");
        assert_eq!(&frame.objects[0].model[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(frame.clear_colour, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(render.frames_prepared(), 1);
    }

    #[test]
    fn test_from_config() {
        let render = RenderSystem::from_config(&RenderingConfig::default());
        assert_eq!(render.clear_colour(), Colour::new(28, 28, 31, 255));
    }

    #[test]
    fn test_set_clear_colour() {
        let mut render = RenderSystem::new(Colour::BLACK);
        render.set_clear_colour(Colour::WHITE);
        let frame = render.prepare_frame(&Scene::new());
        assert_eq!(frame.clear_colour, [1.0; 4]);
        assert!(frame.objects.is_empty());
    }
}
