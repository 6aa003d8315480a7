// Destination model representing the static catalog of known places

use crate::models::Money;
use serde::Serialize;
use std::collections::HashMap;

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair (degrees).
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Represents a destination a traveler can visit
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    /// Unique name of the destination
    pub name: String,

    /// Geographic location of the destination
    pub coordinates: Coordinates,

    /// Category tags, e.g. "Culture" or "Food"
    pub categories: Vec<String>,

    /// Base cost per visit in local currency units
    pub base_cost: Money,

    /// Quality rating on a 0-5 scale
    pub rating: f64,
}

impl Destination {
    /// Creates a new destination with the given attributes
    pub fn new<S: Into<String>>(
        name: S,
        coordinates: Coordinates,
        categories: &[&str],
        base_cost: Money,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            base_cost,
            rating,
        }
    }

    /// Counts how many of this destination's categories appear in `interests`
    pub fn interest_overlap(&self, interests: &[String]) -> usize {
        self.categories
            .iter()
            .filter(|category| interests.contains(category))
            .count()
    }
}

/// Immutable catalog of known destinations, keyed by name.
///
/// Built once at startup and shared read-only by every planning request.
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: HashMap<String, Destination>,
}

impl DestinationCatalog {
    /// Creates a catalog from a list of destinations
    pub fn new(destinations: Vec<Destination>) -> Self {
        let destinations = destinations
            .into_iter()
            .map(|destination| (destination.name.clone(), destination))
            .collect();

        Self { destinations }
    }

    /// Gets a destination by name
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.get(name)
    }

    /// Checks whether the catalog knows a destination
    pub fn contains(&self, name: &str) -> bool {
        self.destinations.contains_key(name)
    }

    /// Number of destinations in the catalog
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// All destination names, sorted for stable presentation
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.destinations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over all destinations
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.values()
    }

    /// All distinct category tags across the catalog, sorted
    pub fn all_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .destinations
            .values()
            .flat_map(|destination| destination.categories.iter().map(String::as_str))
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

impl std::ops::Index<&str> for DestinationCatalog {
    type Output = Destination;

    /// Panics on an unknown name; callers index only with validated names.
    fn index(&self, name: &str) -> &Destination {
        &self.destinations[name]
    }
}

impl Default for DestinationCatalog {
    /// The built-in world catalog used by the demo binary and tests.
    fn default() -> Self {
        Self::new(vec![
            Destination::new(
                "New York",
                Coordinates::new(40.71, -74.00),
                &["Culture", "Museums", "Nightlife", "Food"],
                200.0,
                4.5,
            ),
            Destination::new(
                "Paris",
                Coordinates::new(48.85, 2.35),
                &["Culture", "Museums", "Food", "History"],
                180.0,
                4.7,
            ),
            Destination::new(
                "Tokyo",
                Coordinates::new(35.67, 139.65),
                &["Culture", "Food", "Nightlife", "Museums"],
                220.0,
                4.6,
            ),
            Destination::new(
                "London",
                Coordinates::new(51.50, -0.12),
                &["Culture", "History", "Museums", "Nightlife"],
                190.0,
                4.4,
            ),
            Destination::new(
                "Rome",
                Coordinates::new(41.90, 12.49),
                &["History", "Culture", "Food", "Museums"],
                150.0,
                4.5,
            ),
            Destination::new(
                "Barcelona",
                Coordinates::new(41.38, 2.17),
                &["Culture", "Beach", "Food", "Museums"],
                140.0,
                4.3,
            ),
            Destination::new(
                "Sydney",
                Coordinates::new(-33.86, 151.20),
                &["Beach", "Culture", "Adventure", "Nightlife"],
                170.0,
                4.4,
            ),
            Destination::new(
                "Bangkok",
                Coordinates::new(13.75, 100.50),
                &["Culture", "Food", "Adventure", "Nightlife"],
                80.0,
                4.2,
            ),
            Destination::new(
                "Dubai",
                Coordinates::new(25.20, 55.27),
                &["Adventure", "Culture", "Nightlife", "Beach"],
                250.0,
                4.3,
            ),
            Destination::new(
                "Bali",
                Coordinates::new(-8.34, 115.09),
                &["Beach", "Nature", "Culture", "Adventure"],
                100.0,
                4.6,
            ),
        ])
    }
}
