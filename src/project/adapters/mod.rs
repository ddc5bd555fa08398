//! Adapter implementations of the project ports.

pub mod recording;
pub mod tracing;

pub use recording::{RecordedNotification, RecordingNotifier};
pub use tracing::TracingNotifier;
