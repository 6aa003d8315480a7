// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{ItineraryOptimizer, OptimizerOptions, TripPlanner};
pub use models::{
    BudgetVerdict, CostBreakdown, Destination, DestinationCatalog, Itinerary, PlanError,
    PlanReport, RouteResult, Selection,
};
pub use utils::DistanceTable;
