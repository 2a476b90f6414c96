//! Notification sink interface and built-in implementations.
//!
//! The registry reports every operation outcome, success or failure, as a
//! human-readable message through each registered sink. Sinks perform no
//! validation and cannot reject a message.

use std::sync::{Arc, Mutex};

/// Receives outcome messages from a [`PlanRegistry`].
///
/// [`PlanRegistry`]: crate::registry::PlanRegistry
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Renders notifications to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Collects notifications in memory. Cloning shares the underlying buffer,
/// so a test can keep one handle and register the other.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<String> {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .last()
            .cloned()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .push(message.to_string());
    }
}
