// Genetic itinerary optimizer
//
// Evolves orderings of the selected destinations with elitism and a
// single-swap mutation. There is deliberately no crossover operator and
// no deduplication of identical individuals; both would change the
// convergence behavior this optimizer is tuned for.

use crate::models::{DestinationCatalog, Fitness, Itinerary, Selection};
use crate::utils::DistanceTable;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::cmp::Ordering;
use tracing::debug;

/// One candidate itinerary: a permutation of the selected destinations
/// with the start destination fixed at position 0.
type Individual = Vec<String>;

/// Tuning knobs for the genetic search
#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Number of individuals kept across generations
    pub population_size: usize,

    /// Number of generations to evolve
    pub generations: usize,

    /// Number of top individuals carried over unchanged each generation
    pub elite_count: usize,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 30,
            elite_count: 5,
        }
    }
}

/// Genetic search over visiting orders, maximizing a composite fitness of
/// travel distance, interest match and budget fit.
#[derive(Debug, Clone, Default)]
pub struct ItineraryOptimizer {
    pub options: OptimizerOptions,
}

impl ItineraryOptimizer {
    /// Creates an optimizer with the given options
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    /// Runs the genetic search and returns the fittest itinerary found in
    /// the final population.
    ///
    /// The caller supplies the random source; a seeded generator makes the
    /// whole run reproducible.
    pub fn optimize<R: Rng>(
        &self,
        selection: &Selection,
        table: &DistanceTable,
        catalog: &DestinationCatalog,
        rng: &mut R,
    ) -> Itinerary {
        let mut population = self.initial_population(selection, rng);

        for generation in 0..self.options.generations {
            let mut scored = self.score(population, selection, table, catalog);

            // Elitism: keep the best unchanged, refill with mutated clones
            scored.truncate(self.options.elite_count);
            population = scored.iter().map(|(_, order)| order.clone()).collect();
            while population.len() < self.options.population_size {
                let parent = scored[population.len() % scored.len()].1.clone();
                population.push(self.mutate(parent, rng));
            }

            debug!(
                generation,
                best_fitness = scored[0].0,
                "generation evolved"
            );
        }

        let scored = self.score(population, selection, table, catalog);
        let (fitness, order) = scored.into_iter().next().expect("population is never empty");
        Itinerary::new(order, fitness)
    }

    /// Composite fitness of a visiting order (higher is better).
    ///
    /// Rewards short total distance with a diminishing term capped near
    /// 1000, rewards category overlap with the traveler's interests and
    /// destination quality, and applies a linear penalty proportional to
    /// the fractional amount by which the estimated cost exceeds the
    /// budget. There is no hard budget cutoff: an over-budget ordering can
    /// still win if its other terms dominate.
    pub fn fitness(
        &self,
        order: &[String],
        selection: &Selection,
        table: &DistanceTable,
        catalog: &DestinationCatalog,
    ) -> Fitness {
        let dist = table.path_km(order);

        let base_costs: f64 = order
            .iter()
            .map(|name| catalog[name.as_str()].base_cost)
            .sum();
        let cost = dist * 0.5 + (order.len() as f64 - 1.0) * 100.0 + base_costs;

        let interest_score: f64 = order
            .iter()
            .map(|name| {
                let destination = &catalog[name.as_str()];
                10.0 * destination.interest_overlap(selection.interests()) as f64
                    + 5.0 * destination.rating
            })
            .sum();

        let overage = (cost - selection.budget()) / selection.budget();
        let penalty = overage.max(0.0) * 100.0;

        1000.0 / (1.0 + dist / 100.0) + interest_score - penalty
    }

    /// Random permutations of the selection with the start pinned first
    fn initial_population<R: Rng>(&self, selection: &Selection, rng: &mut R) -> Vec<Individual> {
        let rest: Vec<String> = selection
            .destinations()
            .iter()
            .filter(|name| name.as_str() != selection.start())
            .cloned()
            .collect();

        (0..self.options.population_size)
            .map(|_| {
                let mut order = Vec::with_capacity(rest.len() + 1);
                order.push(selection.start().to_string());
                let mut tail = rest.clone();
                tail.shuffle(rng);
                order.extend(tail);
                order
            })
            .collect()
    }

    /// Swaps two random non-start positions. A no-op for orders of length
    /// two or less, where there is nothing to permute.
    fn mutate<R: Rng>(&self, mut order: Individual, rng: &mut R) -> Individual {
        if order.len() > 2 {
            let picked = index::sample(rng, order.len() - 1, 2);
            order.swap(picked.index(0) + 1, picked.index(1) + 1);
        }
        order
    }

    /// Scores every individual and sorts by fitness descending
    fn score(
        &self,
        population: Vec<Individual>,
        selection: &Selection,
        table: &DistanceTable,
        catalog: &DestinationCatalog,
    ) -> Vec<(Fitness, Individual)> {
        let mut scored: Vec<(Fitness, Individual)> = population
            .into_iter()
            .map(|order| (self.fitness(&order, selection, table, catalog), order))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
    }
}
