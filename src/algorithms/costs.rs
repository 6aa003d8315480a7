// Cost estimation from static per-leg and per-day rates

use crate::models::{CostBreakdown, DestinationCatalog, Selection};

/// Flat transport estimate per travel leg.
const TRANSPORT_PER_LEG: f64 = 150.0;

/// Lodging estimate per overnight stop.
const LODGING_PER_STOP: f64 = 100.0;

/// Daily food estimate.
const FOOD_PER_DAY: f64 = 50.0;

/// Daily incidentals estimate.
const MISC_PER_DAY: f64 = 30.0;

/// Derives the categorized cost estimate for a validated selection.
///
/// A pure function of the selection and the catalog: transport and
/// lodging scale with the number of legs, food and incidentals with the
/// trip length, and activities with each destination's base cost scaled
/// up when its categories overlap the traveler's interests (more
/// activities assumed booked, floor multiplier 1).
pub fn estimate_costs(selection: &Selection, catalog: &DestinationCatalog) -> CostBreakdown {
    let legs = (selection.len() - 1) as f64;
    let days = f64::from(selection.duration_days());

    let activities = selection
        .destinations()
        .iter()
        .map(|name| {
            let destination = &catalog[name.as_str()];
            let overlap = destination.interest_overlap(selection.interests()) as f64;
            destination.base_cost * (0.5 * overlap).max(1.0)
        })
        .sum();

    CostBreakdown {
        transportation: legs * TRANSPORT_PER_LEG,
        accommodation: legs * LODGING_PER_STOP,
        activities,
        food: days * FOOD_PER_DAY,
        misc: days * MISC_PER_DAY,
    }
}
