//! Taskledger: in-memory task and project tracking.
//!
//! This crate provides a small tracking core: tasks carry a constrained
//! status lifecycle and an append-only audit history, while projects own a
//! collection of tasks and record per-task resource allocations.
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (recording, tracing)
//!
//! # Modules
//!
//! - [`task`]: Task entity, status lifecycle, and audit history
//! - [`project`]: Project aggregate, resource allocation, and notification

pub mod project;
pub mod task;
