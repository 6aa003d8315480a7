// Validation errors reported to the presentation layer

use crate::models::Money;
use thiserror::Error;

/// Errors raised while validating a planning request.
///
/// All variants are detected before any route, itinerary or cost
/// computation starts. Once validation passes the core is pure numeric
/// logic with no recoverable failure states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Fewer than two destinations selected
    #[error("at least 2 destinations must be selected, got {0}")]
    InsufficientSelection(usize),

    /// Start destination is not part of the selection
    #[error("start destination {0:?} is not among the selected destinations")]
    InvalidStart(String),

    /// Budget must be strictly positive
    #[error("budget must be positive, got {0}")]
    InvalidBudget(Money),

    /// Trip duration must be strictly positive
    #[error("duration must be a positive number of days, got {0}")]
    InvalidDuration(i64),

    /// A selected destination is missing from the catalog
    #[error("unknown destination {0:?}")]
    UnknownDestination(String),
}
