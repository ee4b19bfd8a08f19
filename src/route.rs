//! Route synthesis and trip estimation
//!
//! A route is a gently curved path between two points, bowed sideways by an
//! amount that grows with the strength of the sea current. Distance, time and
//! fuel are estimated for a reference boat.

use std::f64::consts::PI;

use tracing::debug;

use crate::geo::{distance_km, Coordinates};
use crate::models::{CompassPoint, Route};

/// Number of segments; a route has one more waypoint than this
pub const ROUTE_SEGMENTS: usize = 5;

/// Curvature used when no current is known
pub const DEFAULT_CURVE_FACTOR: f64 = 0.1;

/// Upper bound on curvature regardless of current strength
pub const MAX_CURVE_FACTOR: f64 = 0.3;

/// Reference boat cruising speed, km/h
pub const AVERAGE_SPEED_KMH: f64 = 12.0;

/// Reference boat fuel burn, litres per hour
pub const FUEL_RATE_LPH: f64 = 12.0;

/// Curvature for a given current speed in knots.
///
/// A missing, zero or negative speed counts as no known current and gives
/// [`DEFAULT_CURVE_FACTOR`].
pub fn curve_factor(current_speed_knots: Option<f64>) -> f64 {
    match current_speed_knots {
        Some(speed) if speed > 0.0 => (speed / 10.0).min(MAX_CURVE_FACTOR),
        _ => DEFAULT_CURVE_FACTOR,
    }
}

/// Total length of a polyline, summed segment by segment
pub fn path_length_km(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_km(&pair[0], &pair[1]))
        .sum()
}

/// Build a route from `start` to `end`.
///
/// Waypoints are linearly interpolated and then displaced perpendicular to
/// the start-to-end vector by `sin(fraction * PI) * curve_factor`, so both
/// endpoints are exact and the bulge peaks midway.
///
/// `current_direction` does not affect the curve; only the current speed
/// does.
pub fn calculate_route(
    start: Coordinates,
    end: Coordinates,
    current_speed_knots: Option<f64>,
    current_direction: Option<CompassPoint>,
) -> Route {
    let curve = curve_factor(current_speed_knots);
    let d_lat = end.lat - start.lat;
    let d_lng = end.lng - start.lng;

    let waypoints: Vec<Coordinates> = (0..=ROUTE_SEGMENTS)
        .map(|i| {
            let fraction = i as f64 / ROUTE_SEGMENTS as f64;
            let offset = (fraction * PI).sin() * curve;
            let perp_lat = -d_lng * offset;
            let perp_lng = d_lat * offset;
            Coordinates::new(
                start.lat + d_lat * fraction + perp_lat,
                start.lng + d_lng * fraction + perp_lng,
            )
        })
        .collect();

    let total_distance_km = path_length_km(&waypoints);
    let estimated_time_hours = total_distance_km / AVERAGE_SPEED_KMH;
    let estimated_fuel_liters = estimated_time_hours * FUEL_RATE_LPH;

    debug!(
        curve,
        ?current_direction,
        total_distance_km,
        estimated_time_hours,
        "calculated route"
    );

    Route {
        waypoints,
        total_distance_km,
        estimated_time_hours,
        estimated_fuel_liters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAGAPATTINAM: Coordinates = Coordinates::new(10.7654, 79.8421);
    const RAMESWARAM: Coordinates = Coordinates::new(9.2882, 79.3129);

    #[test]
    fn curvature_from_current() {
        assert_eq!(curve_factor(None), DEFAULT_CURVE_FACTOR);
        assert_eq!(curve_factor(Some(1.0)), 0.1);
        assert_eq!(curve_factor(Some(2.5)), 0.25);
        assert_eq!(curve_factor(Some(8.0)), MAX_CURVE_FACTOR);
    }

    #[test]
    fn still_water_uses_default_curve() {
        assert_eq!(curve_factor(Some(0.0)), DEFAULT_CURVE_FACTOR);
        assert_eq!(curve_factor(Some(-1.0)), DEFAULT_CURVE_FACTOR);
        assert_eq!(curve_factor(Some(f64::NAN)), DEFAULT_CURVE_FACTOR);

        let still = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(0.0), None);
        let unknown = calculate_route(NAGAPATTINAM, RAMESWARAM, None, None);
        assert_eq!(still, unknown);
    }

    #[test]
    fn route_endpoints_and_count() {
        let route = calculate_route(NAGAPATTINAM, RAMESWARAM, None, None);
        assert_eq!(route.waypoints.len(), ROUTE_SEGMENTS + 1);
        assert_eq!(route.waypoints[0], NAGAPATTINAM);
        let last = route.waypoints[ROUTE_SEGMENTS];
        assert!((last.lat - RAMESWARAM.lat).abs() < 1e-9);
        assert!((last.lng - RAMESWARAM.lng).abs() < 1e-9);
    }

    #[test]
    fn curved_route_not_shorter_than_direct() {
        let direct = distance_km(&NAGAPATTINAM, &RAMESWARAM);
        for speed in [None, Some(0.5), Some(1.5), Some(5.0)] {
            let route = calculate_route(NAGAPATTINAM, RAMESWARAM, speed, Some(CompassPoint::NE));
            assert!(route.total_distance_km >= direct, "{speed:?}");
        }
    }

    #[test]
    fn distance_is_segment_sum() {
        let route = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(2.0), None);
        let sum: f64 = route
            .waypoints
            .windows(2)
            .map(|w| distance_km(&w[0], &w[1]))
            .sum();
        assert_eq!(route.total_distance_km, sum);
        assert!((route.estimated_time_hours - sum / 12.0).abs() < 1e-12);
        assert!((route.estimated_fuel_liters - route.estimated_time_hours * 12.0).abs() < 1e-12);
    }

    #[test]
    fn stronger_current_bows_further() {
        let weak = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(0.5), None);
        let strong = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(3.0), None);
        assert!(strong.total_distance_km > weak.total_distance_km);
    }

    #[test]
    fn direction_does_not_change_route() {
        let north = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(1.2), Some(CompassPoint::N));
        let south = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(1.2), Some(CompassPoint::S));
        let none = calculate_route(NAGAPATTINAM, RAMESWARAM, Some(1.2), None);
        assert_eq!(north, south);
        assert_eq!(north, none);
    }

    #[test]
    fn degenerate_route() {
        let route = calculate_route(NAGAPATTINAM, NAGAPATTINAM, Some(1.0), None);
        assert_eq!(route.waypoints.len(), ROUTE_SEGMENTS + 1);
        assert!(route.waypoints.iter().all(|p| *p == NAGAPATTINAM));
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_time_hours, 0.0);
        assert_eq!(route.estimated_fuel_liters, 0.0);
    }
}
