use std::sync::Arc;

use async_trait::async_trait;

use crate::persistence::types::{DrawingRecord, PersistError};

/// Remote store that drawings are saved to and listed from.
#[async_trait]
pub trait DrawingService: Send + Sync {
    /// Submits one drawing. Returns the service's JSON reply.
    async fn save(&self, record: &DrawingRecord) -> Result<serde_json::Value, PersistError>;

    /// Fetches every saved drawing, in server order.
    async fn list(&self) -> Result<Vec<DrawingRecord>, PersistError>;
}

/// The owner-name text field.
pub trait NameInput: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Blocking, user-facing notification (an alert box).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Container the saved drawings are rendered into.
pub trait GalleryView: Send + Sync {
    /// Hides the drawing surface.
    fn hide_drawing_surface(&self);
    /// Removes every rendered entry.
    fn clear(&self);
    /// Appends a heading element.
    fn append_heading(&self, text: &str);
    /// Appends an image element with `src`.
    fn append_image(&self, src: &str);
    /// Makes the gallery visible.
    fn show(&self);
}

/// Bundle of capabilities used by the sketchpad. Each component can be mocked in tests.
#[derive(Clone)]
pub struct SketchpadDependencies {
    pub service: Arc<dyn DrawingService>,
    pub name_input: Arc<dyn NameInput>,
    pub notifier: Arc<dyn Notifier>,
    pub gallery: Arc<dyn GalleryView>,
}
