//! Shared editor constants.

use crate::color::Color;

/// Diffuse color assigned to newly created primitives.
pub const DEFAULT_DIFFUSE_COLOR: Color = Color::from_rgb8(0x3F, 0x7E, 0xBD);

/// Specular color assigned to newly created primitives.
pub const DEFAULT_SPECULAR_COLOR: Color = Color::from_rgb8(0x2A, 0x2A, 0x2A);

/// Emissive color assigned to newly created primitives.
pub const DEFAULT_EMISSIVE_COLOR: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Transparency assigned to newly created primitives.
pub const DEFAULT_TRANSPARENCY: f64 = 0.0;

/// Shininess assigned to newly created primitives.
pub const DEFAULT_SHININESS: f64 = 0.2;

/// Tint used when highlighting the current selection.
pub const HIGHLIGHT_COLOR: Color = Color::from_rgb8(0xFF, 0xFF, 0x00);

/// Snap-grid cell size drag handlers are registered with by default.
pub const DEFAULT_GRID_SIZE: f64 = 0.5;
