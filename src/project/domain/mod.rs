//! Domain model for project aggregation and resource allocation.
//!
//! The project domain owns an ordered, unique-by-identity collection of
//! tasks and a per-task allocation map, validating every cross-entity
//! operation against its own task set before mutating state.

mod allocation;
mod error;
mod project;

pub use allocation::ResourceAllocation;
pub use error::ProjectDomainError;
pub use project::Project;
