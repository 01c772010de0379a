//! # SceneKit Core
//!
//! Foundation types shared by every SceneKit crate:
//!
//! - **Math**: 3D vector aliases used for translations, Euler angles, and
//!   scale factors throughout the editor.
//! - **Color**: RGB color with `#RRGGBB` hex-string conversion, the format
//!   the surrounding web UI speaks.
//! - **Errors**: the editor-wide error taxonomy and `Result` alias.
//! - **Constants**: default material, highlight color, and snap-grid size.

pub mod color;
pub mod constants;
pub mod error;
pub mod math;

pub use color::Color;
pub use error::{EditorError, Result};
pub use math::{vec3, Vec3};
