//! Terminal-backed name field and alert, for driving the widget from a CLI.

use std::sync::Mutex;

use crate::persistence::dependencies::{NameInput, Notifier};

/// Name field pre-filled from the command line.
#[derive(Debug, Default)]
pub struct FixedNameInput {
    value: Mutex<String>,
}

impl FixedNameInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(value.into()),
        }
    }
}

impl NameInput for FixedNameInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        if let Ok(mut current) = self.value.lock() {
            *current = value.to_string();
        }
    }
}

/// Prints alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
