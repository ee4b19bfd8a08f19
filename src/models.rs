//! Data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::geo::Coordinates;

/// One of the eight principal compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];
}

/// Discretized tide, derived from the hour of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideState {
    Rising,
    High,
    Falling,
    Low,
}

impl TideState {
    /// Tide state for an hour of day (0-23).
    ///
    /// The tide cycle repeats every 12 hours in four 3-hour windows:
    /// - 0..3 = rising
    /// - 3..6 = high
    /// - 6..9 = falling
    /// - 9..12 = low
    pub fn from_hour(hour: u32) -> Self {
        match hour % 12 {
            0..=2 => TideState::Rising,
            3..=5 => TideState::High,
            6..=8 => TideState::Falling,
            _ => TideState::Low,
        }
    }

    /// Human readable tide description
    pub fn label(&self) -> &'static str {
        match self {
            TideState::Rising => "incoming",
            TideState::High => "high tide",
            TideState::Falling => "outgoing",
            TideState::Low => "low tide",
        }
    }
}

/// Simulated marine conditions at one location and time
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineConditions {
    /// Air temperature in °C
    pub temperature: f64,
    /// Wind speed in km/h, never negative
    pub wind_speed: f64,
    pub wind_direction: CompassPoint,
    /// Significant wave height in metres
    pub wave_height: f64,
    pub tide_state: TideState,
    pub tide_label: String,
    /// Visibility in km
    pub visibility: f64,
    /// Sea level pressure in hPa
    pub pressure: f64,
    /// UV index, 0 outside daytime hours
    pub uv_index: u8,
    /// Surface current in knots
    pub current_speed: Option<f64>,
    pub current_direction: Option<CompassPoint>,
    /// Overall fishing favourability, 0-10
    pub fishing_index: u8,
}

/// Preferred time of day for a fishing spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::EarlyMorning,
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];
}

/// Fishing season on the south-east Indian coast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Monsoon, Season::Winter];
}

/// Why fishing at a spot is restricted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionReason {
    #[serde(rename = "Marine sanctuary")]
    MarineSanctuary,
    #[serde(rename = "Naval exercise area")]
    NavalExerciseArea,
    #[serde(rename = "International waters")]
    InternationalWaters,
    #[serde(rename = "Coral reef protection")]
    CoralReefProtection,
}

impl RestrictionReason {
    pub const ALL: [RestrictionReason; 4] = [
        RestrictionReason::MarineSanctuary,
        RestrictionReason::NavalExerciseArea,
        RestrictionReason::InternationalWaters,
        RestrictionReason::CoralReefProtection,
    ];
}

/// A procedurally generated fishing spot
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishingSpot {
    /// `spot-{n}`, unique within one generated batch
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// 1-3 distinct species from the regional catalog
    pub species: Vec<String>,
    pub best_time_of_day: TimeOfDay,
    /// 1-3 distinct seasons
    pub best_seasons: Vec<Season>,
    /// Rating 1-10, reduced by 4 (floor 1) if overfished
    pub current_rating: u8,
    /// Rating before any overfishing penalty
    #[serde(skip)]
    pub base_rating: u8,
    pub last_reported_date: NaiveDate,
    pub overfished: bool,
    pub restricted: bool,
    /// Present iff `restricted`
    pub restriction_reason: Option<RestrictionReason>,
}

/// A curved route between two points with trip estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// At least two points; first is the start, last is the end
    pub waypoints: Vec<Coordinates>,
    /// Sum of Haversine lengths of consecutive waypoint segments
    pub total_distance_km: f64,
    pub estimated_time_hours: f64,
    pub estimated_fuel_liters: f64,
}
