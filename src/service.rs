//! Request handling on top of the simulation engine
//!
//! Requests arrive as JSON objects tagged by `type`. Each is validated,
//! dispatched to the matching core operation, and answered with a JSON
//! object; failures are answered with `{"error": ...}`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    boundary::{beyond_territorial_limit, distance_to_coast_nm, TERRITORIAL_LIMIT_NM},
    conditions::compute_conditions,
    config::{AppConfig, EngineConfig},
    errors::MarineError,
    geo::Coordinates,
    harbors::find_harbor,
    models::{CompassPoint, FishingSpot, MarineConditions, Route},
    route::{calculate_route, AVERAGE_SPEED_KMH, FUEL_RATE_LPH},
    spots::generate_spots,
};

/// Cruising speed and fuel burn of the caller's boat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VesselProfile {
    #[serde(alias = "speed_kmh")]
    pub speed_kmh: f64,
    #[serde(alias = "fuel_lph")]
    pub fuel_lph: f64,
}

impl Default for VesselProfile {
    fn default() -> Self {
        Self {
            speed_kmh: AVERAGE_SPEED_KMH,
            fuel_lph: FUEL_RATE_LPH,
        }
    }
}

/// Route estimates rescaled for a particular boat
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEstimate {
    pub estimated_time_hours: f64,
    pub estimated_fuel_liters: f64,
}

impl VesselProfile {
    pub fn validate(&self) -> Result<(), MarineError> {
        if !(self.speed_kmh.is_finite() && self.speed_kmh > 0.0) {
            return Err(MarineError::InvalidVessel(format!(
                "speed must be greater than zero, got {}",
                self.speed_kmh
            )));
        }
        if !(self.fuel_lph.is_finite() && self.fuel_lph >= 0.0) {
            return Err(MarineError::InvalidVessel(format!(
                "fuel rate must not be negative, got {}",
                self.fuel_lph
            )));
        }
        Ok(())
    }

    /// Rescale a reference-boat route estimate to this boat
    pub fn adjust(&self, route: &Route) -> TripEstimate {
        let speed_factor = self.speed_kmh / AVERAGE_SPEED_KMH;
        let fuel_factor = self.fuel_lph / FUEL_RATE_LPH;

        TripEstimate {
            estimated_time_hours: route.estimated_time_hours / speed_factor,
            estimated_fuel_liters: route.estimated_fuel_liters * fuel_factor / speed_factor,
        }
    }
}

/// Route endpoint: a known harbor or raw coordinates
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Harbor { harbor: String },
    Position(Coordinates),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    MarineData {
        lat: f64,
        lng: f64,
    },
    FishingSpots {
        lat: f64,
        lng: f64,
        radius: Option<f64>,
    },
    Boundary {
        lat: f64,
        lng: f64,
    },
    Route {
        start: Endpoint,
        end: Endpoint,
        vessel: Option<VesselProfile>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryReport {
    pub international_waters: bool,
    pub nearest_anchor: &'static str,
    pub distance_nm: f64,
    pub limit_nm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    #[serde(flatten)]
    pub route: Route,
    /// Current sampled at the route midpoint
    pub current_speed: Option<f64>,
    pub current_direction: Option<CompassPoint>,
    pub vessel: VesselProfile,
    pub trip: TripEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    MarineData(MarineConditions),
    FishingSpots(Vec<FishingSpot>),
    Boundary(BoundaryReport),
    Route(RoutePlan),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn validate_position(lat: f64, lng: f64) -> Result<Coordinates, MarineError> {
    let position = Coordinates::new(lat, lng);
    if !position.is_valid() {
        return Err(MarineError::InvalidCoordinate { lat, lng });
    }
    Ok(position)
}

/// Stateful front end owning the random source
pub struct Engine<R = ChaCha20Rng> {
    config: EngineConfig,
    vessel: VesselProfile,
    rng: R,
}

impl Engine<ChaCha20Rng> {
    /// Engine seeded from configuration, or from OS entropy if no seed is set
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.engine.seed {
            Some(seed) => {
                info!("Seeding random source with {}", seed);
                ChaCha20Rng::seed_from_u64(seed)
            }
            None => ChaCha20Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(config: &AppConfig, rng: R) -> Self {
        Self {
            config: config.engine.clone(),
            vessel: config.vessel,
            rng,
        }
    }

    /// Wall-clock time at the fishing grounds
    fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        match FixedOffset::east_opt(self.config.utc_offset_minutes * 60) {
            Some(offset) => now.with_timezone(&offset).naive_local(),
            None => now.naive_utc(),
        }
    }

    fn resolve(&self, endpoint: &Endpoint) -> Result<Coordinates, MarineError> {
        match endpoint {
            Endpoint::Harbor { harbor } => find_harbor(harbor)
                .map(|h| h.coordinates)
                .ok_or_else(|| MarineError::UnknownDestination(harbor.clone())),
            Endpoint::Position(position) => validate_position(position.lat, position.lng),
        }
    }

    /// Answer one request as of `now`
    pub fn handle(
        &mut self,
        request: Request,
        now: DateTime<Utc>,
    ) -> Result<Response, MarineError> {
        debug!("Handling request: {:?}", request);
        let local = self.local_time(now);

        match request {
            Request::MarineData { lat, lng } => {
                validate_position(lat, lng)?;
                let conditions = compute_conditions(lat, lng, local, &mut self.rng);
                Ok(Response::MarineData(conditions))
            }
            Request::FishingSpots { lat, lng, radius } => {
                validate_position(lat, lng)?;
                let radius = radius.unwrap_or(self.config.default_radius_km);
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(MarineError::InvalidRadius(radius));
                }
                let spots = generate_spots(lat, lng, radius, local.date(), &mut self.rng);
                Ok(Response::FishingSpots(spots))
            }
            Request::Boundary { lat, lng } => {
                let position = validate_position(lat, lng)?;
                let (anchor, distance_nm) = distance_to_coast_nm(&position);
                Ok(Response::Boundary(BoundaryReport {
                    international_waters: beyond_territorial_limit(distance_nm),
                    nearest_anchor: anchor.name,
                    distance_nm,
                    limit_nm: TERRITORIAL_LIMIT_NM,
                }))
            }
            Request::Route { start, end, vessel } => {
                let start = self.resolve(&start)?;
                let end = self.resolve(&end)?;
                let vessel = vessel.unwrap_or(self.vessel);
                vessel.validate()?;

                let midpoint = start.midpoint(&end);
                let current = compute_conditions(midpoint.lat, midpoint.lng, local, &mut self.rng);
                let route = calculate_route(
                    start,
                    end,
                    current.current_speed,
                    current.current_direction,
                );
                let trip = vessel.adjust(&route);

                Ok(Response::Route(RoutePlan {
                    route,
                    current_speed: current.current_speed,
                    current_direction: current.current_direction,
                    vessel,
                    trip,
                }))
            }
        }
    }

    /// Answer one JSON request line with one JSON response line
    pub fn handle_line(&mut self, line: &str, now: DateTime<Utc>) -> String {
        let result = serde_json::from_str::<Request>(line)
            .map_err(MarineError::from)
            .and_then(|request| self.handle(request, now))
            .and_then(|response| serde_json::to_string(&response).map_err(MarineError::from));

        match result {
            Ok(json) => json,
            Err(e) => {
                warn!("Request failed: {}", e);
                let body = ErrorResponse {
                    error: e.to_string(),
                };
                serde_json::to_string(&body)
                    .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string())
            }
        }
    }
}
