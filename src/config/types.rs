//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Shadow, StrokeStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen settings applied uniformly to every stroke.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Line width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Stroke color - a named color, CSS hex like `"#333"`, or an RGB array like `[51, 51, 51]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Color of the soft shadow painted when a stroke ends
    #[serde(default = "default_color")]
    pub shadow_color: ColorSpec,

    /// Shadow blur radius in pixels (valid range: 0.0 - 50.0)
    /// Defaults to a quarter of the line width when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            color: default_color(),
            shadow_color: default_color(),
            shadow_blur: None,
        }
    }
}

impl StrokeConfig {
    /// Effective blur radius (explicit value or `line_width / 4`).
    pub fn effective_shadow_blur(&self) -> f64 {
        self.shadow_blur.unwrap_or(self.line_width / 4.0)
    }

    /// Resolves the configuration into the style used by stroke capture.
    pub fn to_style(&self) -> StrokeStyle {
        StrokeStyle {
            line_width: self.line_width,
            color: self.color.to_color(),
            shadow: Shadow {
                color: self.shadow_color.to_color(),
                blur: self.effective_shadow_blur(),
            },
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Drawing service endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ServerConfig {
    /// Base URL of the drawing service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path drawings are POSTed to
    #[serde(default = "default_save_path")]
    pub save_path: String,

    /// Path the saved drawings are listed from
    #[serde(default = "default_list_path")]
    pub list_path: String,

    /// Request timeout in seconds (valid range: 1 - 300)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            save_path: default_save_path(),
            list_path: default_list_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_width() -> f64 {
    20.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#333".to_string())
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

pub(crate) fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_save_path() -> String {
    "/data/save".to_string()
}

fn default_list_path() -> String {
    "/data/getData".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
