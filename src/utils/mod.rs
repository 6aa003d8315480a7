// Utils module - distance math shared by the planning algorithms

pub mod distance;

pub use self::distance::{haversine_km, DistanceTable, EARTH_RADIUS_KM};
