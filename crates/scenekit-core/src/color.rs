//! RGB color with hex-string conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EditorError, Result};

/// An RGB color with components in `[0, 1]`.
///
/// The web UI exchanges colors as `#RRGGBB` strings; [`Color::from_hex`] and
/// [`Color::to_hex`] convert at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Creates a color from components in `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parses a `#RRGGBB` literal.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let digits = literal
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| EditorError::InvalidColor {
                literal: literal.to_string(),
            })?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        Ok(Self::from_rgb8(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Formats the color as a `#RRGGBB` literal.
    pub fn to_hex(&self) -> String {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
