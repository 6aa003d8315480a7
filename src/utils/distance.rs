// Great-circle distance utilities and the pairwise distance table

use crate::models::{Coordinates, DestinationCatalog, Km};
use std::collections::HashMap;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle distance between two coordinates in kilometers
/// using the haversine formula.
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> Km {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}

/// Precomputed pairwise distances between every destination in a catalog.
///
/// Built once per catalog and shared read-only across planning requests.
/// Symmetric, with self-distances fixed at zero.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: HashMap<String, HashMap<String, Km>>,
}

impl DistanceTable {
    /// Materializes the full pairwise table over a catalog
    pub fn build(catalog: &DestinationCatalog) -> Self {
        let mut distances = HashMap::with_capacity(catalog.len());

        for from in catalog.iter() {
            let mut row = HashMap::with_capacity(catalog.len());
            for to in catalog.iter() {
                let km = if from.name == to.name {
                    0.0
                } else {
                    haversine_km(&from.coordinates, &to.coordinates)
                };
                row.insert(to.name.clone(), km);
            }
            distances.insert(from.name.clone(), row);
        }

        Self { distances }
    }

    /// Distance in kilometers between two destinations.
    ///
    /// Both names must come from the catalog the table was built over;
    /// a miss is a programming defect, not a user error.
    pub fn km(&self, from: &str, to: &str) -> Km {
        self.distances[from][to]
    }

    /// Total distance along a path of destination names
    pub fn path_km(&self, path: &[String]) -> Km {
        path.windows(2).map(|leg| self.km(&leg[0], &leg[1])).sum()
    }
}
