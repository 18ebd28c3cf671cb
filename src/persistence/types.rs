//! Data types for saving and listing drawings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A saved drawing as exchanged with the drawing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingRecord {
    /// Name of the person who drew it
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    /// The image, encoded as a data URI
    pub drawing: String,
}

/// Body of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryResponse {
    #[serde(default)]
    pub data: Vec<DrawingRecord>,
}

/// Errors that can occur while saving or loading drawings.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Please enter your name")]
    Validation,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to export drawing: {0}")]
    Export(#[from] crate::draw::DrawError),
}

/// Outcome of a save request.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Owner name missing; the user was alerted and nothing was sent.
    Rejected,
    /// Drawing accepted; carries the service reply. The canvas was cleared.
    Submitted(serde_json::Value),
    /// Export or network exchange failed; the canvas is untouched.
    Failed(String),
}

/// Outcome of a gallery load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryOutcome {
    /// The listing was fetched and this many records were rendered.
    Loaded(usize),
    /// The listing could not be fetched; an empty gallery was rendered.
    Fallback(String),
}

/// Which view the widget currently presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Drawing surface visible (initial state)
    Drawing,
    /// Gallery shown; there is no way back without a reload
    Gallery,
}
