//! Stroke capture state machine.

use super::events::{EventResponse, ElementOffset, PointerEvent, PointerPhase, canvas_position};
use crate::draw::{DrawError, DrawingSurface, StrokeStyle};
use log::{debug, warn};

/// Turns pointer events into painted strokes on an injected surface.
///
/// Holds the single active-stroke flag: it is set by a stroke start and
/// cleared by a stroke end, so at most one stroke is in progress. Finished
/// strokes exist only as pixels on the surface.
pub struct StrokeCapture<S: DrawingSurface> {
    /// Rendering surface strokes are painted onto
    surface: S,
    /// Pen parameters applied to every stroke
    style: StrokeStyle,
    /// Offset of the drawing element inside the viewport
    offset: ElementOffset,
    /// Whether a pointer is currently pressed on the surface
    drawing: bool,
}

impl<S: DrawingSurface> StrokeCapture<S> {
    /// Creates a capture bound to `surface`, with the element at the viewport origin.
    pub fn new(surface: S, style: StrokeStyle) -> Self {
        Self {
            surface,
            style,
            offset: ElementOffset::default(),
            drawing: false,
        }
    }

    /// Updates where the drawing element sits in the viewport (after layout changes).
    pub fn set_element_offset(&mut self, offset: ElementOffset) {
        self.offset = offset;
    }

    pub fn element_offset(&self) -> ElementOffset {
        self.offset
    }

    /// True between a stroke start and the matching end.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Begins a new stroke at the event position (mousedown / touchstart).
    pub fn on_stroke_start(&mut self, event: &PointerEvent) -> EventResponse {
        let Some(position) = canvas_position(event, self.offset) else {
            debug!("Ignoring stroke start without a pointer position: {:?}", event);
            return EventResponse::PREVENT_DEFAULT;
        };

        self.surface.begin_path(position, &self.style);
        self.drawing = true;
        debug!("Stroke started at ({:.1}, {:.1})", position.x, position.y);
        EventResponse::PREVENT_DEFAULT
    }

    /// Extends the active stroke and paints the new segment (mousemove / touchmove).
    pub fn on_stroke_move(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.drawing {
            return EventResponse::PREVENT_DEFAULT;
        }
        let Some(position) = canvas_position(event, self.offset) else {
            debug!("Ignoring stroke move without a pointer position");
            return EventResponse::PREVENT_DEFAULT;
        };

        if let Err(e) = self.surface.extend_path(position) {
            warn!("Failed to paint stroke segment: {}", e);
        }
        EventResponse::PREVENT_DEFAULT
    }

    /// Finishes the active stroke with its shadow pass (release or leave).
    ///
    /// The event is optional: touch end carries no position and none is needed.
    pub fn on_stroke_end(&mut self, _event: Option<&PointerEvent>) -> EventResponse {
        if self.drawing {
            if let Err(e) = self.surface.finish_path(&self.style.shadow) {
                warn!("Failed to finish stroke: {}", e);
            }
            debug!("Stroke finished");
        }
        self.drawing = false;
        EventResponse::PREVENT_DEFAULT
    }

    /// Routes an event to the handler registered for its phase.
    pub fn dispatch(&mut self, phase: PointerPhase, event: Option<&PointerEvent>) -> EventResponse {
        match (phase, event) {
            (PointerPhase::Down, Some(event)) => self.on_stroke_start(event),
            (PointerPhase::Move, Some(event)) => self.on_stroke_move(event),
            (PointerPhase::Down | PointerPhase::Move, None) => {
                debug!("Ignoring {:?} without an event payload", phase);
                EventResponse::PREVENT_DEFAULT
            }
            (PointerPhase::Up | PointerPhase::Leave, event) => self.on_stroke_end(event),
        }
    }

    /// Erases the surface.
    pub fn clear_surface(&mut self) -> Result<(), DrawError> {
        self.surface.clear()
    }
}
