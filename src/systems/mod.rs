//! Application systems
//!
//! Systems extracted from main.rs for better organization and testability.

mod render;

pub use render::{clear_colour_floats, FrameData, ObjectUniforms, RenderSystem};
