// Route model produced by the greedy route builder

use crate::models::{Hours, Km};
use serde::Serialize;

/// A low-distance visiting order over the selected destinations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Visiting order, starting at the trip's start destination
    pub path: Vec<String>,

    /// Total great-circle distance along the path
    pub distance_km: Km,

    /// Estimated travel time at the assumed average speed
    pub time_hours: Hours,

    /// Number of stops on the path
    pub count: usize,
}

impl RouteResult {
    /// Creates a route result, deriving the stop count from the path
    pub fn new(path: Vec<String>, distance_km: Km, time_hours: Hours) -> Self {
        let count = path.len();
        Self {
            path,
            distance_km,
            time_hours,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_path() {
        let route = RouteResult::new(
            vec!["Paris".to_string(), "Rome".to_string()],
            1105.0,
            18.4,
        );
        assert_eq!(route.count, 2);
        assert_eq!(route.path[0], "Paris");
    }
}
