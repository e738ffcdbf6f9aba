//! Vector, matrix and colour math for building render transforms
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size float vectors
//! - [`Matrix3`], [`Matrix4`] - column-major square matrices with transform factories
//! - [`Colour`] - 32-bit packed RGBA colour
//!
//! ## Equality
//!
//! Vectors and matrices compare with an absolute per-component tolerance
//! (see [`Tolerance`]); colours compare exactly.
//!
//! ## Handing data to a graphics backend
//!
//! Every vector and matrix type is `Pod`. `as_array()` / `as_slice()` give the
//! components in column-major order, ready for a uniform upload.

mod flat;
mod tolerance;
mod vec2;
mod vec3;
mod vec4;
pub mod mat3;
pub mod mat4;
pub mod colour;
pub mod error;

pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
pub use mat3::Matrix3;
pub use mat4::Matrix4;
pub use colour::Colour;
pub use error::LengthError;
pub use tolerance::{ApproxEq, Tolerance, DEFAULT_EPSILON};
