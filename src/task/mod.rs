//! Task lifecycle management for Taskledger.
//!
//! This module implements the task side of the tracker: creating a task with
//! a validated title, editing title and description, moving the task through
//! its status lifecycle, and recording every mutation in an append-only
//! history. All infrastructure concerns stay outside the domain boundary:
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
