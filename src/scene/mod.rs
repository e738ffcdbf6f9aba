//! Scene construction
//!
//! A scene is a flat list of [`Object3D`]s built from [`SceneConfig`].

mod object;

pub use object::Object3D;

use crate::config::SceneConfig;

/// The objects being drawn
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Object3D>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from configuration
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            objects: config.objects.iter().map(Object3D::from).collect(),
        }
    }

    pub fn add_object(mut self, object: Object3D) -> Self {
        self.objects.push(object);
        self
    }

    pub fn objects(&self) -> &[Object3D] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Look up an object by name
    pub fn get_by_name(&self, name: &str) -> Option<&Object3D> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Advance every object by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }
}
