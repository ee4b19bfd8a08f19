//! Territorial waters classification
//!
//! A point is in international waters when it lies more than 12 nautical
//! miles from the coast. Distance to the coast is approximated by the
//! distance to the nearest of a fixed set of coastline anchors, not by the
//! distance to the coastline polyline between them. Points close to the
//! shore but midway between two distant anchors can therefore be classified
//! as international waters.

use serde::Serialize;
use tracing::trace;

use crate::geo::{distance_km, km_to_nautical_miles, Coordinates};

/// Territorial sea limit in nautical miles
pub const TERRITORIAL_LIMIT_NM: f64 = 12.0;

/// A named reference point on the coastline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoastlineAnchor {
    pub name: &'static str,
    pub position: Coordinates,
}

/// Tamil Nadu coastline, north to south
pub static COASTLINE: [CoastlineAnchor; 8] = [
    CoastlineAnchor {
        name: "Chennai",
        position: Coordinates::new(13.05, 80.25),
    },
    CoastlineAnchor {
        name: "Mahabalipuram",
        position: Coordinates::new(12.62, 80.18),
    },
    CoastlineAnchor {
        name: "Pondicherry",
        position: Coordinates::new(11.93, 79.83),
    },
    CoastlineAnchor {
        name: "Cuddalore",
        position: Coordinates::new(11.42, 79.7),
    },
    CoastlineAnchor {
        name: "Nagapattinam",
        position: Coordinates::new(10.77, 79.84),
    },
    CoastlineAnchor {
        name: "Vedaranyam",
        position: Coordinates::new(10.39, 79.85),
    },
    CoastlineAnchor {
        name: "Rameswaram",
        position: Coordinates::new(9.28, 79.31),
    },
    CoastlineAnchor {
        name: "Kanyakumari",
        position: Coordinates::new(8.08, 77.55),
    },
];

/// Nearest coastline anchor and its distance in nautical miles
pub fn distance_to_coast_nm(point: &Coordinates) -> (&'static CoastlineAnchor, f64) {
    let mut nearest = &COASTLINE[0];
    let mut min_km = distance_km(point, &nearest.position);

    for anchor in COASTLINE.iter().skip(1) {
        let km = distance_km(point, &anchor.position);
        if km < min_km {
            nearest = anchor;
            min_km = km;
        }
    }

    let nm = km_to_nautical_miles(min_km);
    trace!(anchor = nearest.name, nm, "nearest coastline anchor");
    (nearest, nm)
}

/// True if a distance from the coast lies beyond the territorial sea
pub fn beyond_territorial_limit(distance_nm: f64) -> bool {
    distance_nm > TERRITORIAL_LIMIT_NM
}

/// True if the point is beyond the territorial limit of every anchor
pub fn is_international_waters(lat: f64, lng: f64) -> bool {
    let (_, nm) = distance_to_coast_nm(&Coordinates::new(lat, lng));
    beyond_territorial_limit(nm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_territorial() {
        for anchor in COASTLINE.iter() {
            assert!(
                !is_international_waters(anchor.position.lat, anchor.position.lng),
                "{} should be territorial",
                anchor.name
            );
        }
    }

    #[test]
    fn chennai_anchor() {
        assert!(!is_international_waters(13.05, 80.25));
        let (anchor, nm) = distance_to_coast_nm(&Coordinates::new(13.05, 80.25));
        assert_eq!(anchor.name, "Chennai");
        assert_eq!(nm, 0.0);
    }

    #[test]
    fn null_island_is_international() {
        assert!(is_international_waters(0.0, 0.0));
    }

    #[test]
    fn limit_boundary() {
        // 0.1° of latitude is ~11.1 km = ~6 nm, 0.3° is ~18 nm
        assert!(!is_international_waters(13.15, 80.25));
        assert!(is_international_waters(13.35, 80.6));
    }

    #[test]
    fn limit_is_exclusive() {
        assert!(!beyond_territorial_limit(TERRITORIAL_LIMIT_NM));
        assert!(beyond_territorial_limit(TERRITORIAL_LIMIT_NM + 0.001));
        assert!(!beyond_territorial_limit(0.0));
    }

    #[test]
    fn nearest_anchor_selection() {
        let (anchor, _) = distance_to_coast_nm(&Coordinates::new(9.3, 79.4));
        assert_eq!(anchor.name, "Rameswaram");
        let (anchor, _) = distance_to_coast_nm(&Coordinates::new(8.0, 77.0));
        assert_eq!(anchor.name, "Kanyakumari");
    }

    #[test]
    fn gap_between_anchors_is_approximated() {
        // Kanyakumari and Rameswaram are ~240 km apart; the coast between them
        // is not represented, so a point near Tuticorin is far from any anchor.
        assert!(is_international_waters(8.7642, 78.1348));
    }
}
