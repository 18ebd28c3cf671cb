//! Rendering primitives for the drawing surface (Cairo-based).
//!
//! This module defines the core drawing types used by stroke capture:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokeStyle`] / [`Shadow`]: pen parameters applied to every stroke
//! - [`DrawingSurface`]: the injected rendering surface
//! - [`CairoCanvas`]: offscreen Cairo implementation of that surface

pub mod canvas;
pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use canvas::CairoCanvas;
pub use color::Color;
pub use surface::{DrawError, DrawingSurface, Point, Shadow, StrokeStyle};

pub use color::{BLACK, BLUE, CHARCOAL, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};

#[cfg(test)]
pub(crate) mod recording;
