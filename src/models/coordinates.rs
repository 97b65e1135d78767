use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Initial great-circle bearing towards `other`, in degrees clockwise
    /// from north, normalized to [0, 360).
    pub fn bearing_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let y = delta_lng.sin() * lat2_rad.cos();
        let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lng.cos();

        let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if degrees >= 360.0 {
            0.0
        } else {
            degrees
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(36.7378, -119.7871).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng
    }

    #[test]
    fn test_distance_calculation() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let london = Coordinates::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_for_same_point() {
        let a = Coordinates::new(36.7378, -119.7871).unwrap();
        let b = Coordinates::new(36.8100, -119.7000).unwrap();

        assert_eq!(a.distance_to(&a), 0.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let center = Coordinates::new(36.7378, -119.7871).unwrap();

        let north = Coordinates::new(36.8378, -119.7871).unwrap();
        let east = Coordinates::new(36.7378, -119.6871).unwrap();
        let south = Coordinates::new(36.6378, -119.7871).unwrap();
        let west = Coordinates::new(36.7378, -119.8871).unwrap();

        assert!(center.bearing_to(&north) < 0.01);
        assert!((center.bearing_to(&east) - 90.0).abs() < 1.0);
        assert!((center.bearing_to(&south) - 180.0).abs() < 0.01);
        assert!((center.bearing_to(&west) - 270.0).abs() < 1.0);
    }

    #[test]
    fn test_bearing_range() {
        let center = Coordinates::new(0.0, 0.0).unwrap();
        let northwest = Coordinates::new(0.001, -0.001).unwrap();

        let bearing = center.bearing_to(&northwest);
        assert!((0.0..360.0).contains(&bearing));
        assert!((bearing - 315.0).abs() < 0.1);
    }
}
