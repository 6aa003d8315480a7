// Algorithms module - the planning and optimization engine

pub mod costs;
pub mod genetic;
pub mod planner;
pub mod route;

pub use self::costs::estimate_costs;
pub use self::genetic::{ItineraryOptimizer, OptimizerOptions};
pub use self::planner::TripPlanner;
pub use self::route::build_route;
