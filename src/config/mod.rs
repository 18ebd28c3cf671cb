//! Configuration file support for sketchwall.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchwall/config.toml`. Settings include the pen style,
//! the canvas size and the drawing service endpoints.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ServerConfig, StrokeConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [stroke]
/// line_width = 20.0
/// color = "#333"
/// shadow_color = "#333"
/// shadow_blur = 5.0
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [server]
/// base_url = "http://localhost:8000"
/// save_path = "/data/save"
/// list_path = "/data/getData"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen style (width, color, shadow)
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing service endpoints
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke.line_width`: 1.0 - 100.0
    /// - `stroke.shadow_blur`: 0.0 - 50.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `server.timeout_secs`: 1 - 300
    /// - `server.base_url`: must parse as an http(s) URL
    pub(crate) fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.stroke.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-100.0 range",
                self.stroke.line_width
            );
            self.stroke.line_width = if self.stroke.line_width.is_nan() {
                1.0
            } else {
                self.stroke.line_width.clamp(1.0, 100.0)
            };
        }

        if let Some(blur) = self.stroke.shadow_blur
            && !(0.0..=50.0).contains(&blur)
        {
            log::warn!("Invalid shadow_blur {:.1}, clamping to 0.0-50.0 range", blur);
            self.stroke.shadow_blur = Some(if blur.is_nan() {
                0.0
            } else {
                blur.clamp(0.0, 50.0)
            });
        }

        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        if !(1..=300).contains(&self.server.timeout_secs) {
            log::warn!(
                "Invalid timeout_secs {}, clamping to 1-300 range",
                self.server.timeout_secs
            );
            self.server.timeout_secs = self.server.timeout_secs.clamp(1, 300);
        }

        let base_ok = Url::parse(&self.server.base_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !base_ok {
            log::warn!(
                "Invalid base_url '{}', falling back to '{}'",
                self.server.base_url,
                types::default_base_url()
            );
            self.server.base_url = types::default_base_url();
        }
    }

    /// Full URL drawings are saved to.
    pub fn save_url(&self) -> Result<Url> {
        join_endpoint(&self.server.base_url, &self.server.save_path)
    }

    /// Full URL the gallery is listed from.
    pub fn list_url(&self) -> Result<Url> {
        join_endpoint(&self.server.base_url, &self.server.list_path)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchwall/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchwall");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn join_endpoint(base: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).with_context(|| format!("Invalid endpoint URL '{}'", joined))
}
