//! Project aggregate owning tasks and their resource allocations.

use super::{ProjectDomainError, ResourceAllocation};
use crate::task::domain::{TaskId, TaskIdentity};
use std::collections::HashMap;

/// Aggregate owning a set of tasks and their resource allocations.
///
/// The task collection is ordered by insertion and unique by [`TaskId`];
/// lookups never rely on object identity. The aggregate is generic over the
/// task representation so unrelated task implementations interoperate as
/// long as they expose an identity through [`TaskIdentity`].
///
/// An allocation entry exists only for tasks that are in the project, and
/// each [`Self::allocate_resources`] call replaces the stored list wholesale.
#[derive(Debug, Clone)]
pub struct Project<T: TaskIdentity> {
    name: String,
    tasks: Vec<T>,
    allocations: HashMap<TaskId, Vec<ResourceAllocation>>,
}

impl<T: TaskIdentity> Project<T> {
    /// Creates an empty project with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            allocations: HashMap::new(),
        }
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether a task with the given identifier is in the project.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.task_id() == task_id)
    }

    /// Adds a task to the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateTask`] when a task with the
    /// same identifier is already present. The task sequence is unchanged on
    /// failure.
    pub fn add_task(&mut self, task: T) -> Result<(), ProjectDomainError> {
        let task_id = task.task_id();
        if self.contains(task_id) {
            return Err(ProjectDomainError::DuplicateTask(task_id));
        }

        self.tasks.push(task);
        Ok(())
    }

    /// Returns a snapshot of the task sequence in insertion order.
    ///
    /// Mutating the returned vector does not affect the project.
    #[must_use]
    pub fn list_tasks(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.tasks.clone()
    }

    /// Replaces the resource allocations stored for a task.
    ///
    /// The task must already be in the project. On success the previously
    /// stored list, if any, is fully replaced with the supplied list in the
    /// order given; allocations are never merged.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotInProject`] when no task with
    /// the given task's identifier has been added. Stored allocations are
    /// unchanged on failure.
    pub fn allocate_resources(
        &mut self,
        task: &T,
        allocations: Vec<ResourceAllocation>,
    ) -> Result<(), ProjectDomainError> {
        let task_id = task.task_id();
        if !self.contains(task_id) {
            return Err(ProjectDomainError::TaskNotInProject(task_id));
        }

        self.allocations.insert(task_id, allocations);
        Ok(())
    }

    /// Returns a snapshot of the allocations stored for a task.
    ///
    /// Returns an empty vector when nothing was ever allocated to the
    /// task's identifier. Mutating the returned vector does not affect the
    /// project.
    #[must_use]
    pub fn allocations(&self, task: &T) -> Vec<ResourceAllocation> {
        self.allocations
            .get(&task.task_id())
            .cloned()
            .unwrap_or_default()
    }
}
