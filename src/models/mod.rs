// Models module - exports all model types

mod costs;
mod destination;
mod error;
mod itinerary;
mod report;
mod route;
mod selection;

// Re-export model types
pub use self::costs::{BudgetVerdict, CostBreakdown};
pub use self::destination::{Coordinates, Destination, DestinationCatalog};
pub use self::error::PlanError;
pub use self::itinerary::Itinerary;
pub use self::report::PlanReport;
pub use self::route::RouteResult;
pub use self::selection::Selection;

// Common type aliases for improved code readability
pub type Km = f64;
pub type Hours = f64;
pub type Money = f64;
pub type Fitness = f64;
