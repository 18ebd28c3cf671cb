//! The drawing widget: stroke capture plus the clear/save/gallery actions.

use log::{debug, error, info};

use crate::draw::DrawingSurface;
use crate::input::{EventResponse, PointerEvent, PointerPhase, StrokeCapture};
use crate::persistence::{
    DrawingRecord, GalleryOutcome, PersistError, SaveOutcome, SketchpadDependencies, ViewMode,
};
use crate::util::encode_data_uri;

/// Media type of exported drawings.
pub const EXPORT_MIME: &str = "image/png";

/// One drawing widget instance.
///
/// Owns its stroke capture (and through it the rendering surface) and the
/// injected capabilities for the name field, alerts, the gallery container
/// and the drawing service. Instances share nothing with each other.
pub struct Sketchpad<S: DrawingSurface> {
    capture: StrokeCapture<S>,
    deps: SketchpadDependencies,
    mode: ViewMode,
}

impl<S: DrawingSurface> Sketchpad<S> {
    pub fn new(capture: StrokeCapture<S>, deps: SketchpadDependencies) -> Self {
        Self {
            capture,
            deps,
            mode: ViewMode::Drawing,
        }
    }

    pub fn capture(&self) -> &StrokeCapture<S> {
        &self.capture
    }

    pub fn capture_mut(&mut self) -> &mut StrokeCapture<S> {
        &mut self.capture
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Forwards a pointer event from the drawing surface.
    pub fn handle_pointer(
        &mut self,
        phase: PointerPhase,
        event: Option<&PointerEvent>,
    ) -> EventResponse {
        self.capture.dispatch(phase, event)
    }

    /// Erases the canvas and empties the name field.
    pub fn clear(&mut self) {
        if let Err(e) = self.capture.clear_surface() {
            log::warn!("Failed to clear canvas: {}", e);
        }
        self.deps.name_input.set_value("");
        debug!("Canvas and name cleared");
    }

    /// Submits the drawing under the name currently in the name field.
    ///
    /// An empty (or whitespace-only) name is reported through the notifier and
    /// nothing is sent. Export and network failures are only logged; the canvas
    /// is cleared only after the service accepted the drawing.
    pub async fn save(&mut self) -> SaveOutcome {
        let owner_name = self.deps.name_input.value();
        if owner_name.trim().is_empty() {
            self.deps.notifier.alert(&PersistError::Validation.to_string());
            return SaveOutcome::Rejected;
        }

        match self.submit(owner_name).await {
            Ok(reply) => {
                info!("Drawing saved: {}", reply);
                self.clear();
                SaveOutcome::Submitted(reply)
            }
            Err(e) => {
                error!("Failed to save drawing: {}", e);
                SaveOutcome::Failed(e.to_string())
            }
        }
    }

    async fn submit(&mut self, owner_name: String) -> Result<serde_json::Value, PersistError> {
        let png = self.capture.surface_mut().export_png()?;
        let record = DrawingRecord {
            owner_name,
            drawing: encode_data_uri(EXPORT_MIME, &png),
        };
        self.deps.service.save(&record).await
    }

    /// Replaces the drawing surface with the gallery of saved drawings.
    ///
    /// A failed fetch is logged and renders an empty gallery; the surface is
    /// hidden either way. There is no transition back to drawing.
    pub async fn load_gallery(&mut self) -> GalleryOutcome {
        let (records, outcome) = match self.deps.service.list().await {
            Ok(records) => {
                info!("Loaded {} drawings", records.len());
                let count = records.len();
                (records, GalleryOutcome::Loaded(count))
            }
            Err(e) => {
                error!("Failed to load drawings: {}", e);
                (Vec::new(), GalleryOutcome::Fallback(e.to_string()))
            }
        };

        let gallery = &self.deps.gallery;
        gallery.hide_drawing_surface();
        gallery.clear();
        for record in &records {
            gallery.append_heading(&record.owner_name);
            gallery.append_image(&record.drawing);
        }
        gallery.show();

        self.mode = ViewMode::Gallery;
        outcome
    }
}

#[cfg(test)]
mod tests;
