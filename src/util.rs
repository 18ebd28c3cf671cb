//! Utility functions for colors and data URIs.
//!
//! This module provides:
//! - Color name and CSS hex parsing for the configuration system
//! - Data URI encoding/decoding for exported drawings

use crate::draw::{Color, color::*};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black",
///   "charcoal"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "charcoal" => Some(CHARCOAL),
        _ => None,
    }
}

/// Parses a CSS hex color (`#rgb` or `#rrggbb`).
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(Color::from_rgb8(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}

/// Resolves a color written either as a name or as CSS hex.
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.starts_with('#') {
        hex_to_color(spec)
    } else {
        name_to_color(spec)
    }
}

// ============================================================================
// Data URIs
// ============================================================================

/// Encodes bytes as a base64 data URI, e.g. `data:image/png;base64,iVBOR...`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// A decoded base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Media type, e.g. `image/png`
    pub mime: String,
    /// Decoded payload
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// File extension matching the media type (`bin` when unknown).
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "bin",
        }
    }
}

/// Decodes a `data:<mime>;base64,<payload>` URI.
///
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn decode_data_uri(uri: &str) -> Option<DataUri> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let mime = mime.split(';').next().unwrap_or_default();
    let bytes = STANDARD.decode(payload.trim()).ok()?;

    Some(DataUri {
        mime: if mime.is_empty() {
            "text/plain".to_string()
        } else {
            mime.to_ascii_lowercase()
        },
        bytes,
    })
}
