//! Error types for project domain validation.

use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned while mutating project aggregates.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectDomainError {
    /// A task with the same identifier is already in the project.
    #[error("task with id={0} already exists in project")]
    DuplicateTask(TaskId),

    /// The task has not been added to the project.
    #[error("task with id={0} is not in this project")]
    TaskNotInProject(TaskId),

    /// The allocation resource name is empty after trimming.
    #[error("resource name must not be empty")]
    EmptyResourceName,

    /// The allocation units are zero or negative.
    #[error("resource units must be positive, got {0}")]
    NonPositiveUnits(f64),
}
