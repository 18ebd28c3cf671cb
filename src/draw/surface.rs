//! Rendering surface abstraction used by stroke capture.

use super::color::Color;
use thiserror::Error;

/// A position in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Soft shadow applied to a finished stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Blur radius in pixels (0 disables the shadow)
    pub blur: f64,
}

/// Pen parameters applied uniformly to every stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub line_width: f64,
    /// Stroke color
    pub color: Color,
    /// Shadow painted when the stroke ends
    pub shadow: Shadow,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        let line_width = 20.0;
        Self {
            line_width,
            color: super::color::CHARCOAL,
            shadow: Shadow {
                color: super::color::CHARCOAL,
                blur: line_width / 4.0,
            },
        }
    }
}

/// Errors raised by a rendering surface.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("Surface pixel data unavailable: {0}")]
    PixelAccess(String),
}

/// Something strokes can be painted onto.
///
/// The surface owns the *current path*: [`begin_path`](Self::begin_path)
/// starts it, [`extend_path`](Self::extend_path) appends a point and paints
/// the new segment right away, and [`finish_path`](Self::finish_path) paints
/// the shadow pass over the whole path. Pixels already painted are never
/// tracked as structured strokes.
pub trait DrawingSurface {
    /// Surface dimensions in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Starts a new path at `at`, using `style` for subsequent painting.
    fn begin_path(&mut self, at: Point, style: &StrokeStyle);

    /// Extends the current path to `to` and paints the new segment.
    fn extend_path(&mut self, to: Point) -> Result<(), DrawError>;

    /// Paints the current path once more with `shadow` underneath it.
    fn finish_path(&mut self, shadow: &Shadow) -> Result<(), DrawError>;

    /// Erases every pixel and forgets the current path.
    fn clear(&mut self) -> Result<(), DrawError>;

    /// Encodes the current bitmap as PNG.
    fn export_png(&mut self) -> Result<Vec<u8>, DrawError>;
}
