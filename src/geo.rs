//! Great-circle geometry.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres to nautical miles
pub const KM_TO_NAUTICAL_MILES: f64 = 0.539957;

/// A point in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    /// Latitude, -90..=90
    pub lat: f64,
    /// Longitude, -180..=180
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True if both components are finite and within WGS84 bounds
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Midpoint of the straight line between two points in degree space
    pub fn midpoint(&self, other: &Coordinates) -> Coordinates {
        Coordinates::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }
}

/// Haversine distance in kilometres between two points.
///
/// Symmetric in its arguments and zero for identical points.
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Kilometres converted to nautical miles
pub fn km_to_nautical_miles(km: f64) -> f64 {
    km * KM_TO_NAUTICAL_MILES
}
