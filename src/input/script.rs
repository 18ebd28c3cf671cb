//! Recorded pointer input that can be replayed onto a capture.

use super::capture::StrokeCapture;
use super::events::{ElementOffset, PointerEvent, PointerPhase};
use crate::draw::DrawingSurface;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded listener invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub phase: PointerPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerEvent>,
}

/// A sequence of pointer events together with the element offset they were recorded against.
///
/// # Example JSON
/// ```json
/// {
///   "offset": { "left": 8.0, "top": 8.0 },
///   "events": [
///     { "phase": "down", "pointer": { "type": "mouse", "client_x": 18.0, "client_y": 18.0 } },
///     { "phase": "move", "pointer": { "type": "mouse", "client_x": 58.0, "client_y": 18.0 } },
///     { "phase": "up" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    #[serde(default)]
    pub offset: ElementOffset,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

impl StrokeScript {
    /// Reads a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stroke script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse stroke script {}", path.display()))
    }

    /// Feeds every event to `capture`, using the recorded element offset.
    ///
    /// A stroke still active at the end of the script is ended, as if the
    /// pointer had left the surface.
    pub fn replay<S: DrawingSurface>(&self, capture: &mut StrokeCapture<S>) {
        capture.set_element_offset(self.offset);
        for event in &self.events {
            let _ = capture.dispatch(event.phase, event.pointer.as_ref());
        }
        if capture.is_drawing() {
            let _ = capture.on_stroke_end(None);
        }
        log::debug!("Replayed {} pointer events", self.events.len());
    }
}
