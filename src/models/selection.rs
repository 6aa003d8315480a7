// Selection model representing one validated planning request

use crate::models::{DestinationCatalog, Money, PlanError};
use serde::Serialize;

/// A validated planning request.
///
/// Construction performs the full fail-fast validation, so a `Selection`
/// that exists is always safe to plan: every destination is known to the
/// catalog, the start is part of the selection, and budget and duration
/// are positive.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    /// Ordered set of selected destination names
    destinations: Vec<String>,

    /// Starting destination, always a member of `destinations`
    start: String,

    /// Trip budget in local currency units
    budget: Money,

    /// Trip length in days
    duration_days: u32,

    /// Interest categories (may be empty)
    interests: Vec<String>,
}

impl Selection {
    /// Validates the raw request data and builds a `Selection`.
    ///
    /// Checks are ordered so the most fundamental problem is reported
    /// first: selection size, then start membership, then budget and
    /// duration, then catalog membership of every selected name.
    pub fn new(
        destinations: Vec<String>,
        start: String,
        budget: Money,
        duration_days: i64,
        interests: Vec<String>,
        catalog: &DestinationCatalog,
    ) -> Result<Self, PlanError> {
        // Treat the input as an ordered set: drop repeated names, keep first occurrence
        let mut unique = Vec::with_capacity(destinations.len());
        for name in destinations {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        if unique.len() < 2 {
            return Err(PlanError::InsufficientSelection(unique.len()));
        }

        if !unique.contains(&start) {
            return Err(PlanError::InvalidStart(start));
        }

        if budget <= 0.0 {
            return Err(PlanError::InvalidBudget(budget));
        }

        if duration_days <= 0 {
            return Err(PlanError::InvalidDuration(duration_days));
        }

        for name in &unique {
            if !catalog.contains(name) {
                return Err(PlanError::UnknownDestination(name.clone()));
            }
        }

        Ok(Self {
            destinations: unique,
            start,
            budget,
            duration_days: duration_days as u32,
            interests,
        })
    }

    /// Selected destination names in selection order
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Starting destination name
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Trip budget
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Trip length in days
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Interest categories
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Number of selected destinations
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// A selection always holds at least two destinations
    pub fn is_empty(&self) -> bool {
        false
    }
}
