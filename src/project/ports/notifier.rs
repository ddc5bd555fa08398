//! Notifier port for reporting task and project events.

/// Event-reporting contract implemented outside the domain core.
///
/// The core never invokes this port itself: collaborators wrap task and
/// project operations and report the resulting events to whatever delivery
/// mechanism the host application injects (console, log, message queue).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Reports a single named event with a human-readable message.
    fn notify(&self, event: &str, message: &str);
}
