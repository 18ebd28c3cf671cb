//! Library exports for the sketchwall drawing widget.
//!
//! Exposes the stroke capture state machine, the Cairo rendering surface, the
//! drawing service client and the [`widget::Sketchpad`] that ties them together,
//! so hosts can embed the widget with their own input and view plumbing.

pub mod config;
pub mod draw;
pub mod files;
pub mod input;
pub mod persistence;
pub mod util;
pub mod widget;

pub use config::Config;
pub use widget::Sketchpad;
