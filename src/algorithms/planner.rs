// Trip planner - runs the full pipeline and assembles the report

use crate::algorithms::costs::estimate_costs;
use crate::algorithms::genetic::{ItineraryOptimizer, OptimizerOptions};
use crate::algorithms::route::build_route;
use crate::models::{DestinationCatalog, Money, PlanError, PlanReport, Selection};
use crate::utils::DistanceTable;
use rand::Rng;
use tracing::info;

/// Plans trips over a fixed destination catalog.
///
/// The pairwise distance table is built once at construction and shared
/// read-only by every request. Planning itself is pure in-memory
/// computation: validation happens up front when the `Selection` is
/// built, and the route builder and optimizer run on independent inputs.
pub struct TripPlanner {
    catalog: DestinationCatalog,
    table: DistanceTable,
    optimizer: ItineraryOptimizer,
}

impl TripPlanner {
    /// Creates a planner over a catalog with default optimizer settings
    pub fn new(catalog: DestinationCatalog) -> Self {
        Self::with_options(catalog, OptimizerOptions::default())
    }

    /// Creates a planner with explicit optimizer settings
    pub fn with_options(catalog: DestinationCatalog, options: OptimizerOptions) -> Self {
        let table = DistanceTable::build(&catalog);
        Self {
            catalog,
            table,
            optimizer: ItineraryOptimizer::new(options),
        }
    }

    /// The catalog this planner plans over
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// The precomputed distance table
    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Validates raw request data and produces a full plan.
    ///
    /// This is the single entry point for the presentation layer: any
    /// validation failure is returned before any planning work starts.
    #[allow(clippy::too_many_arguments)]
    pub fn plan_request<R: Rng + Send>(
        &self,
        destinations: Vec<String>,
        start: String,
        budget: Money,
        duration_days: i64,
        interests: Vec<String>,
        rng: &mut R,
    ) -> Result<PlanReport, PlanError> {
        let selection = Selection::new(
            destinations,
            start,
            budget,
            duration_days,
            interests,
            &self.catalog,
        )?;
        Ok(self.plan(selection, rng))
    }

    /// Produces a plan for an already-validated selection.
    ///
    /// The greedy route and the genetic itinerary are independent of each
    /// other, so they run on parallel workers.
    pub fn plan<R: Rng + Send>(&self, selection: Selection, rng: &mut R) -> PlanReport {
        let (route, itinerary) = rayon::join(
            || build_route(&selection, &self.table),
            || self.optimizer.optimize(&selection, &self.table, &self.catalog, rng),
        );

        let costs = estimate_costs(&selection, &self.catalog);

        info!(
            stops = route.count,
            route_km = route.distance_km,
            fitness = itinerary.fitness,
            total_cost = costs.total(),
            "plan assembled"
        );

        PlanReport::assemble(selection, route, itinerary, costs)
    }
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new(DestinationCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetVerdict;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_request_end_to_end() {
        let planner = TripPlanner::default();
        let mut rng = StdRng::seed_from_u64(42);

        let report = planner
            .plan_request(
                names(&["New York", "Paris"]),
                "New York".to_string(),
                2000.0,
                7,
                names(&["Culture"]),
                &mut rng,
            )
            .unwrap();

        assert_eq!(report.route.path, names(&["New York", "Paris"]));
        assert!((report.route.distance_km - 5837.0).abs() < 50.0);
        assert_eq!(report.total, 1190.0);
        assert_eq!(report.verdict, BudgetVerdict::WithinBudget);
    }

    #[test]
    fn test_plan_request_rejects_invalid_input() {
        let planner = TripPlanner::default();
        let mut rng = StdRng::seed_from_u64(0);

        let result = planner.plan_request(
            names(&["Paris"]),
            "Paris".to_string(),
            1000.0,
            7,
            vec![],
            &mut rng,
        );
        assert_eq!(result.unwrap_err(), PlanError::InsufficientSelection(1));
    }

    #[test]
    fn test_plan_is_reproducible_for_a_seed() {
        let planner = TripPlanner::default();

        let request = |rng: &mut StdRng| {
            planner
                .plan_request(
                    names(&["Rome", "Paris", "London", "Barcelona"]),
                    "Rome".to_string(),
                    3000.0,
                    10,
                    names(&["Culture", "Food"]),
                    rng,
                )
                .unwrap()
        };

        let first = request(&mut StdRng::seed_from_u64(99));
        let second = request(&mut StdRng::seed_from_u64(99));

        assert_eq!(first.itinerary, second.itinerary);
        assert_eq!(first.route, second.route);
        assert_eq!(first.total, second.total);
    }
}
