// Greedy nearest-neighbor route construction

use crate::models::{Km, RouteResult, Selection};
use crate::utils::DistanceTable;

/// Average travel speed assumed when converting distance to time.
pub const AVERAGE_SPEED_KMH: f64 = 60.0;

/// Builds a low-distance visiting order by nearest-unvisited-neighbor
/// expansion from the start destination.
///
/// This is a cheap construction heuristic, not a shortest-path search:
/// it gives a fast, reasonable baseline route while the genetic optimizer
/// does the actual optimization work. Ties on distance are broken by
/// lexicographic name order so the route is a pure function of its inputs.
pub fn build_route(selection: &Selection, table: &DistanceTable) -> RouteResult {
    let start = selection.start();

    let mut frontier: Vec<&String> = selection
        .destinations()
        .iter()
        .filter(|name| name.as_str() != start)
        .collect();

    let mut path = vec![start.to_string()];
    let mut current = start.to_string();
    let mut total_km: Km = 0.0;

    while !frontier.is_empty() {
        let mut best = 0;
        for candidate in 1..frontier.len() {
            let candidate_km = table.km(&current, frontier[candidate]);
            let best_km = table.km(&current, frontier[best]);

            if candidate_km < best_km
                || (candidate_km == best_km && frontier[candidate] < frontier[best])
            {
                best = candidate;
            }
        }

        let next = frontier.swap_remove(best);
        total_km += table.km(&current, next);
        current = next.clone();
        path.push(current.clone());
    }

    let time_hours = total_km / AVERAGE_SPEED_KMH;
    RouteResult::new(path, total_km, time_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationCatalog;

    fn selection(names: &[&str], start: &str) -> Selection {
        Selection::new(
            names.iter().map(|s| s.to_string()).collect(),
            start.to_string(),
            5000.0,
            7,
            vec![],
            &DestinationCatalog::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_route_is_permutation_with_fixed_start() {
        let catalog = DestinationCatalog::default();
        let table = DistanceTable::build(&catalog);
        let selection = selection(&["Tokyo", "Paris", "London", "Rome"], "Paris");

        let route = build_route(&selection, &table);

        assert_eq!(route.path[0], "Paris");
        assert_eq!(route.count, 4);

        let mut sorted = route.path.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["London", "Paris", "Rome", "Tokyo"]);
    }

    #[test]
    fn test_route_total_matches_table_lookups() {
        let catalog = DestinationCatalog::default();
        let table = DistanceTable::build(&catalog);
        let selection = selection(&["New York", "Paris", "Rome", "Sydney"], "New York");

        let route = build_route(&selection, &table);
        assert_eq!(route.distance_km, table.path_km(&route.path));
        assert_eq!(route.time_hours, route.distance_km / AVERAGE_SPEED_KMH);
    }

    #[test]
    fn test_route_picks_nearest_neighbor() {
        let catalog = DestinationCatalog::default();
        let table = DistanceTable::build(&catalog);
        // From London, Paris is far closer than Tokyo
        let selection = selection(&["London", "Tokyo", "Paris"], "London");

        let route = build_route(&selection, &table);
        assert_eq!(route.path, vec!["London", "Paris", "Tokyo"]);
    }

    #[test]
    fn test_route_is_deterministic() {
        let catalog = DestinationCatalog::default();
        let table = DistanceTable::build(&catalog);
        let selection = selection(&["Rome", "Barcelona", "Paris", "London", "Dubai"], "Rome");

        let first = build_route(&selection, &table);
        let second = build_route(&selection, &table);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_destination_route() {
        let catalog = DestinationCatalog::default();
        let table = DistanceTable::build(&catalog);
        let selection = selection(&["New York", "Paris"], "New York");

        let route = build_route(&selection, &table);
        assert_eq!(route.path, vec!["New York", "Paris"]);
        assert!((route.distance_km - 5837.0).abs() < 50.0);
    }
}
