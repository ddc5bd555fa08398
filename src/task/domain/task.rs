//! Task entity and its mutation operations.

use super::{HistoryAction, HistoryEntry, TaskDomainError, TaskId, TaskIdentity, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of work with identity, title, description, status, and history.
///
/// A task is constructed standalone with [`Task::new`] and then initialised
/// with [`Task::create`]. Every successful mutation appends exactly one
/// [`HistoryEntry`]; the history is append-only and exposed only as an
/// immutable view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    history: Vec<HistoryEntry>,
}

impl Task {
    /// Creates an empty task with the given identifier.
    ///
    /// The task starts in [`TaskStatus::Todo`] with an empty title,
    /// description, and history.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            history: Vec::new(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the change history in chronological call order.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Initialises the task with a title and description.
    ///
    /// Both values are trimmed before being stored. Calling `create` on an
    /// already initialised task re-initialises it and appends another
    /// history entry; there is no create-once guard.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming. The task is left unchanged on failure.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let raw_title = title.into();
        let trimmed_title = raw_title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        self.title = trimmed_title.to_owned();
        let raw_description = description.into();
        self.description = raw_description.trim().to_owned();

        let details = format!("title='{}'", self.title);
        self.log(HistoryAction::Create, details, clock);
        Ok(())
    }

    /// Edits the title and/or description.
    ///
    /// `None` means "leave unchanged". A supplied title is trimmed and must
    /// remain non-empty; a supplied description is trimmed and may be empty.
    /// Exactly one `edit` history entry is appended regardless of which
    /// fields changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when a supplied title is
    /// empty after trimming. The task is left unchanged on failure.
    pub fn edit(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let new_title = title
            .map(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(TaskDomainError::EmptyTitle)
                } else {
                    Ok(trimmed.to_owned())
                }
            })
            .transpose()?;

        if let Some(value) = new_title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value.trim().to_owned();
        }

        let details = format!("title='{}'", self.title);
        self.log(HistoryAction::Edit, details, clock);
        Ok(())
    }

    /// Sets the lifecycle status from a raw string value.
    ///
    /// The input is trimmed and lower-cased before matching. Any status may
    /// follow any other; a same-to-same transition still appends a history
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] when the normalised value
    /// is not a known status. The task is left unchanged on failure.
    pub fn set_status(&mut self, status: &str, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let next = TaskStatus::try_from(status)?;
        let previous = self.status;
        self.status = next;
        let details = format!("{previous} -> {next}");
        self.log(HistoryAction::StatusChange, details, clock);
        Ok(())
    }

    /// Appends one history entry stamped with the current clock time.
    fn log(&mut self, action: HistoryAction, details: String, clock: &impl Clock) {
        self.history.push(HistoryEntry::new(clock.utc(), action, details));
    }
}

impl TaskIdentity for Task {
    fn task_id(&self) -> TaskId {
        self.id
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {} '{}' ({})", self.id, self.title, self.status)
    }
}
