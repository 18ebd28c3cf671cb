//! Configuration enum types.

use crate::draw::{Color, color::CHARCOAL};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, CSS hex, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "red"
///
/// # CSS hex, short or long form
/// color = "#333"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, charcoal) or `#rgb` / `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names and malformed hex fall back to charcoal with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using #333", name);
                CHARCOAL
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
