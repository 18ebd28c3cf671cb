//! Pointer event types shared by mouse and touch input.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// Position reported by the platform in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// A pointer event as delivered to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Mouse event with its client position
    Mouse { client_x: f64, client_y: f64 },
    /// Touch event with every active touch point
    Touch { touches: Vec<ClientPoint> },
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        PointerEvent::Mouse { client_x, client_y }
    }

    pub fn touch(points: &[(f64, f64)]) -> Self {
        PointerEvent::Touch {
            touches: points
                .iter()
                .map(|&(client_x, client_y)| ClientPoint { client_x, client_y })
                .collect(),
        }
    }

    /// Client position of the event: the mouse position, or the first touch.
    ///
    /// Returns `None` for a touch event without touch points.
    pub fn client_position(&self) -> Option<ClientPoint> {
        match self {
            PointerEvent::Mouse { client_x, client_y } => Some(ClientPoint {
                client_x: *client_x,
                client_y: *client_y,
            }),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Offset of the drawing element inside the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementOffset {
    pub left: f64,
    pub top: f64,
}

impl ElementOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Maps an event to canvas-local coordinates: client position minus element offset.
pub fn canvas_position(event: &PointerEvent, offset: ElementOffset) -> Option<Point> {
    event
        .client_position()
        .map(|p| Point::new(p.client_x - offset.left, p.client_y - offset.top))
}

/// Which listener an event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// mousedown / touchstart
    Down,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Up,
    /// mouseout (pointer left the surface)
    Leave,
}

/// What the caller must do with the platform event after handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct EventResponse {
    /// Suppress the default action (text selection, scrolling)
    pub prevent_default: bool,
}

impl EventResponse {
    pub(crate) const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
    };
}
