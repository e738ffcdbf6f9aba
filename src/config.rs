//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`EMC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`EMC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // EMC_DEBUG__LOG_LEVEL=trace -> debug.log_level = "trace"
        figment = figment.merge(Env::prefixed("EMC_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Clear colour as [r, g, b, a] bytes
    pub clear_colour: [u8; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            // 0.11, 0.11, 0.12 in float terms
            clear_colour: [28, 28, 31, 255],
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Objects to place in the scene
    pub objects: Vec<ObjectConfig>,
    /// Number of fixed-step frames to simulate
    pub frames: u32,
    /// Fixed timestep in seconds
    pub frame_time: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects: vec![
                ObjectConfig {
                    name: "cube".to_string(),
                    spin: [0.0, 250.0, 0.0],
                    ..ObjectConfig::default()
                },
                ObjectConfig {
                    name: "light_cube".to_string(),
                    position: [-2.0, 0.0, 0.0],
                    ..ObjectConfig::default()
                },
            ],
            frames: 3,
            frame_time: 1.0 / 60.0,
        }
    }
}

/// A single scene object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Name used in logs and frame output
    pub name: String,
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Euler rotation [x, y, z] in degrees
    pub rotation: [f32; 3],
    /// Scale [x, y, z]
    pub scale: [f32; 3],
    /// Rotation speed [x, y, z] in degrees per second
    pub spin: [f32; 3],
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: "object".to_string(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            spin: [0.0; 3],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.rendering.clear_colour, [28, 28, 31, 255]);
        assert_eq!(config.scene.objects.len(), 2);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("clear_colour"));
        assert!(toml.contains("light_cube"));
    }

    #[test]
    fn test_partial_object_uses_defaults() {
        let object: ObjectConfig = toml::from_str("name = \"quad\"\nposition = [1.0, 2.0, 3.0]").unwrap();
        assert_eq!(object.name, "quad");
        assert_eq!(object.position, [1.0, 2.0, 3.0]);
        assert_eq!(object.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_load_from_missing_dir_gives_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.scene.frames, SceneConfig::default().frames);
    }
}
