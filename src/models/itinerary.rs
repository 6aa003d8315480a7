// Itinerary model produced by the genetic optimizer

use crate::models::Fitness;
use serde::Serialize;

/// The optimizer's winning visiting order together with its fitness score.
///
/// The order is a permutation of the selected destinations with the start
/// destination fixed at position 0. One entry is visited per leg of the
/// trip; day assignment is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Visiting order, start destination first
    pub order: Vec<String>,

    /// Composite fitness of this ordering (higher is better)
    pub fitness: Fitness,
}

impl Itinerary {
    /// Creates an itinerary from an ordering and its fitness
    pub fn new(order: Vec<String>, fitness: Fitness) -> Self {
        Self { order, fitness }
    }

    /// Number of destinations in the itinerary
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the itinerary has no destinations
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
