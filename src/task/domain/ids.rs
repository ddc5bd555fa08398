//! Identifier types and the identity contract for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned identifier for a task, unique within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a caller-assigned integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity contract for task-like values held by a project.
///
/// Projects never rely on object identity; every lookup goes through the
/// [`TaskId`] returned here. Any type exposing an integer task identity can
/// be tracked by a project, so unrelated task implementations interoperate
/// as long as they implement this trait.
pub trait TaskIdentity {
    /// Returns the identifier used for uniqueness within a project.
    fn task_id(&self) -> TaskId;
}
