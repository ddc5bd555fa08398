//! Append-only change history for task entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mutation recorded in a task's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// The task was (re-)initialised with a title and description.
    Create,
    /// The task's title or description was edited.
    Edit,
    /// The task moved from one status to another.
    StatusChange,
}

impl HistoryAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::StatusChange => "status_change",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single audit record in a task's history.
///
/// Entries are created by the task itself on every successful mutation and
/// are never reordered or truncated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    timestamp: DateTime<Utc>,
    action: HistoryAction,
    details: String,
}

impl HistoryEntry {
    /// Creates a history entry stamped with the given timestamp.
    pub(crate) const fn new(timestamp: DateTime<Utc>, action: HistoryAction, details: String) -> Self {
        Self {
            timestamp,
            action,
            details,
        }
    }

    /// Returns the time the mutation was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the recorded action kind.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the human-readable details of the mutation.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}
