//! Notifier adapter emitting events through the `tracing` ecosystem.

use crate::project::ports::Notifier;
use tracing::info;

/// Notifier that forwards each event as a structured `tracing` event.
///
/// Delivery is controlled by whichever subscriber the host application
/// installs; without one the events are discarded, which matches the
/// fire-and-forget contract of the port.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, event: &str, message: &str) {
        info!(event, message, "tracker notification");
    }
}
