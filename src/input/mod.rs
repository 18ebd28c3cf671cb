//! Pointer input handling and stroke capture.
//!
//! This module translates mouse and touch events into canvas-local positions
//! and drives the stroke state machine that paints onto a [`DrawingSurface`].
//!
//! [`DrawingSurface`]: crate::draw::DrawingSurface

pub mod capture;
pub mod events;
pub mod script;


// Re-export commonly used types at module level
pub use capture::StrokeCapture;
pub use events::{
    ClientPoint, ElementOffset, EventResponse, PointerEvent, PointerPhase, canvas_position,
};
pub use script::{ScriptedEvent, StrokeScript};
