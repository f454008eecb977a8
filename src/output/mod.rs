//! Shared output field.
//!
//! # Design Decisions
//! - Single undifferentiated sink for status strings and response bodies
//! - Last writer wins; no history is kept
//! - Backed by a tokio watch channel so front ends can observe updates

use std::sync::Arc;
use tokio::sync::watch;

/// Clonable handle to the single output field shared by all dispatches.
///
/// Status messages and response bodies overwrite each other; the visible
/// value is whatever was written last in wall-clock time.
#[derive(Clone)]
pub struct OutputField {
    tx: Arc<watch::Sender<String>>,
}

impl OutputField {
    /// Create an empty output field.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(String::new());
        Self { tx: Arc::new(tx) }
    }

    /// Overwrite the field.
    pub fn set(&self, text: impl Into<String>) {
        // send_replace never fails even with no subscribers
        self.tx.send_replace(text.into());
    }

    /// Snapshot the current value.
    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Subscribe to value changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for OutputField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OutputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputField")
            .field("value", &*self.tx.borrow())
            .finish()
    }
}
