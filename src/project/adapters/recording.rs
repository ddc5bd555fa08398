//! In-memory notifier for tests and demos.

use crate::project::ports::Notifier;
use std::sync::{Arc, PoisonError, RwLock};

/// Notification captured by a [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    /// Event name as reported.
    pub event: String,
    /// Message as reported.
    pub message: String,
}

/// Thread-safe notifier that records every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    state: Arc<RwLock<Vec<RecordedNotification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the notifications recorded so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedNotification> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &str, message: &str) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotification {
                event: event.to_owned(),
                message: message.to_owned(),
            });
    }
}
