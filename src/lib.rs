//! Transform demo built on `emc_math`
//!
//! - [`config`] - layered TOML/env configuration
//! - [`scene`] - objects with position, rotation and scale
//! - [`systems`] - per-frame render data preparation

pub mod config;
pub mod scene;
pub mod systems;
