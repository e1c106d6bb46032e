//! Configuration types for fixture generation.

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Returns a random point within the bounding box.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        (lat, lon)
    }
}

/// Pre-defined geographic regions for fixture generation.
///
/// The coordinates are plausible city-scale boxes; node placement within
/// them is uniform and carries no road-network realism.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Mumbai area - the default region for generated graphs.
    pub const MUMBAI: BoundingBox = BoundingBox::new(19.0, 72.8, 19.2, 73.0);

    /// Pune area - an alternate region for multi-graph test suites.
    pub const PUNE: BoundingBox = BoundingBox::new(18.45, 73.75, 18.65, 73.95);
}

/// Point-of-interest categories attached to generated nodes and named by
/// kNN queries.
pub const POI_VOCABULARY: &[&str] = &[
    "restaurant",
    "hospital",
    "pharmacy",
    "hotel",
    "atm",
    "petrol station",
];
