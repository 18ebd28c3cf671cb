//! Saving drawings to, and listing them from, the drawing service.
//!
//! This module provides:
//! - The wire types (`{ ownerName, drawing }` records)
//! - The capability traits the sketchpad is built from
//! - An HTTP implementation of the drawing service
//! - An HTML gallery view and terminal capabilities for use outside a browser

pub mod console;
pub mod dependencies;
pub mod html;
pub mod http;
pub mod types;

pub use console::{FixedNameInput, StderrNotifier};
pub use dependencies::{DrawingService, GalleryView, NameInput, Notifier, SketchpadDependencies};
pub use html::{GalleryElement, HtmlGalleryView};
pub use http::HttpDrawingService;
pub use types::{
    DrawingRecord, GalleryOutcome, GalleryResponse, PersistError, SaveOutcome, ViewMode,
};
