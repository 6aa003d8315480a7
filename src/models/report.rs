// Plan report model - the aggregate output handed to the presentation layer

use crate::models::{
    BudgetVerdict, CostBreakdown, Itinerary, Money, RouteResult, Selection,
};
use serde::Serialize;

/// The complete result of one planning request.
///
/// Assembled once by the planner and handed to the presentation layer;
/// the core never formats or displays it.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// Echo of the validated request
    pub selection: Selection,

    /// Low-distance visiting order from the greedy builder
    pub route: RouteResult,

    /// Winning itinerary from the genetic optimizer
    pub itinerary: Itinerary,

    /// Categorized cost estimate
    pub costs: CostBreakdown,

    /// Sum over all cost categories
    pub total: Money,

    /// Whether the total fits the requested budget
    pub verdict: BudgetVerdict,
}

impl PlanReport {
    /// Assembles a report, deriving the total and the budget verdict
    pub fn assemble(
        selection: Selection,
        route: RouteResult,
        itinerary: Itinerary,
        costs: CostBreakdown,
    ) -> Self {
        let total = costs.total();
        let verdict = BudgetVerdict::for_total(total, selection.budget());

        Self {
            selection,
            route,
            itinerary,
            costs,
            total,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationCatalog;

    #[test]
    fn test_assemble_derives_total_and_verdict() {
        let catalog = DestinationCatalog::default();
        let selection = Selection::new(
            vec!["New York".to_string(), "Paris".to_string()],
            "New York".to_string(),
            2000.0,
            7,
            vec!["Culture".to_string()],
            &catalog,
        )
        .unwrap();

        let route = RouteResult::new(
            vec!["New York".to_string(), "Paris".to_string()],
            5837.0,
            97.3,
        );
        let itinerary = Itinerary::new(
            vec!["New York".to_string(), "Paris".to_string()],
            1000.0,
        );
        let costs = CostBreakdown {
            transportation: 150.0,
            accommodation: 100.0,
            activities: 380.0,
            food: 350.0,
            misc: 210.0,
        };

        let report = PlanReport::assemble(selection, route, itinerary, costs);
        assert_eq!(report.total, 1190.0);
        assert_eq!(report.verdict, BudgetVerdict::WithinBudget);
    }
}
