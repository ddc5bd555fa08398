//! Resource allocation value objects.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable (resource name, units) pair assigned to a task.
///
/// For example `ResourceAllocation::new("Dev#1", 6.0)` describes six units
/// (hours, say) of the resource named `Dev#1`. Allocations carry no identity
/// beyond structural equality and are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    resource_name: String,
    units: f64,
}

impl ResourceAllocation {
    /// Creates a validated resource allocation.
    ///
    /// The resource name is trimmed before being stored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyResourceName`] when the name is
    /// empty after trimming, or [`ProjectDomainError::NonPositiveUnits`]
    /// when `units` is zero or negative.
    pub fn new(resource_name: impl Into<String>, units: f64) -> Result<Self, ProjectDomainError> {
        let raw = resource_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyResourceName);
        }
        if units <= 0.0 {
            return Err(ProjectDomainError::NonPositiveUnits(units));
        }

        Ok(Self {
            resource_name: normalized.to_owned(),
            units,
        })
    }

    /// Returns the name of the allocated resource.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Returns the number of allocated units.
    #[must_use]
    pub const fn units(&self) -> f64 {
        self.units
    }
}

impl fmt::Display for ResourceAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.resource_name, self.units)
    }
}
