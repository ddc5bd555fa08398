//! Project aggregate and resource allocation for Taskledger.
//!
//! This module implements the project side of the tracker: collecting tasks
//! under a named project, enforcing identity uniqueness, and recording
//! per-task resource allocations with destructive-overwrite semantics. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
