use crate::constants::{DEFAULT_CENTRAL_RADIUS_KM, REGION_CENTER_LAT, REGION_CENTER_LNG};
use crate::models::{Coordinates, Region};
use std::collections::HashMap;

/// Postal codes with a known region. Anything else resolves to central.
const ZIP_REGIONS: &[(&str, Region)] = &[
    // Downtown and the inner ring
    ("93701", Region::Central),
    ("93721", Region::Central),
    ("93728", Region::Central),
    ("93704", Region::Central),
    // North
    ("93710", Region::North),
    ("93711", Region::North),
    ("93720", Region::North),
    ("93730", Region::North),
    ("93650", Region::North),
    // East
    ("93702", Region::East),
    ("93703", Region::East),
    ("93727", Region::East),
    ("93737", Region::East),
    // South
    ("93706", Region::South),
    ("93725", Region::South),
    // West
    ("93705", Region::West),
    ("93722", Region::West),
    ("93723", Region::West),
];

/// Maps a postal code or a coordinate pair onto one of the five regions.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    center: Coordinates,
    central_radius_km: f64,
    zip_regions: HashMap<&'static str, Region>,
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CENTRAL_RADIUS_KM)
    }
}

impl RegionResolver {
    pub fn new(central_radius_km: f64) -> Self {
        RegionResolver {
            center: Coordinates {
                lat: REGION_CENTER_LAT,
                lng: REGION_CENTER_LNG,
            },
            central_radius_km,
            zip_regions: ZIP_REGIONS.iter().copied().collect(),
        }
    }

    pub fn center(&self) -> &Coordinates {
        &self.center
    }

    /// Resolve a user's region. Coordinates win over the postal code; with
    /// neither the neutral central region is returned.
    pub fn resolve(&self, zip: Option<&str>, coordinates: Option<&Coordinates>) -> Region {
        match (coordinates, zip) {
            (Some(coords), _) => self.from_coordinates(coords),
            (None, Some(zip)) => self.from_zip(zip),
            (None, None) => Region::Central,
        }
    }

    pub fn from_zip(&self, zip: &str) -> Region {
        self.zip_regions
            .get(zip.trim())
            .copied()
            .unwrap_or(Region::Central)
    }

    pub fn from_coordinates(&self, coordinates: &Coordinates) -> Region {
        if self.center.distance_to(coordinates) <= self.central_radius_km {
            return Region::Central;
        }
        Self::quadrant(self.center.bearing_to(coordinates))
    }

    /// Bucket a bearing into 90° quadrants centered on the cardinal directions.
    /// A bearing exactly on a boundary belongs to the clockwise-next quadrant.
    fn quadrant(bearing: f64) -> Region {
        let bearing = bearing.rem_euclid(360.0);
        if !(45.0..315.0).contains(&bearing) {
            Region::North
        } else if bearing < 135.0 {
            Region::East
        } else if bearing < 225.0 {
            Region::South
        } else {
            Region::West
        }
    }
}
