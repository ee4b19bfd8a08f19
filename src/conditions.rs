//! Marine condition simulation
//!
//! Conditions are a deterministic function of location and local time plus
//! uniform noise drawn from the supplied random source.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::Rng;
use tracing::debug;

use crate::models::{CompassPoint, MarineConditions, TideState};

/// Longitude of the reference coastline used for the coastal damping factor
const COASTAL_LONGITUDE: f64 = 80.0;
const COASTAL_BAND_DEG: f64 = 0.5;
const COASTAL_FACTOR: f64 = 0.7;

/// April to September
pub fn is_summer(month: u32) -> bool {
    (4..=9).contains(&month)
}

/// 06:00 to 18:59 local time
pub fn is_daytime(hour: u32) -> bool {
    (6..=18).contains(&hour)
}

/// Dampening applied to the diurnal temperature swing near the coast
pub fn coastal_factor(lng: f64) -> f64 {
    if (lng - COASTAL_LONGITUDE).abs() < COASTAL_BAND_DEG {
        COASTAL_FACTOR
    } else {
        1.0
    }
}

/// Fishing favourability score, 0-10.
///
/// Starts from 4 and adds up to 2 points each for time of day (early
/// morning or evening), tide (rising best, high second), moderate wind and
/// calm sea.
pub fn fishing_index(hour: u32, tide: TideState, wind_speed: f64, wave_height: f64) -> u8 {
    let time_quality = if hour < 9 || hour > 16 { 2 } else { 0 };
    let tide_quality = match tide {
        TideState::Rising => 2,
        TideState::High => 1,
        TideState::Falling | TideState::Low => 0,
    };
    let wind_quality = if wind_speed > 5.0 && wind_speed < 20.0 {
        2
    } else if wind_speed < 30.0 {
        1
    } else {
        0
    };
    let wave_quality = if wave_height < 1.5 {
        2
    } else if wave_height < 2.5 {
        1
    } else {
        0
    };

    (4 + time_quality + tide_quality + wind_quality + wave_quality).clamp(0, 10)
}

fn compass_point<R: Rng + ?Sized>(rng: &mut R) -> CompassPoint {
    CompassPoint::ALL[rng.gen_range(0..CompassPoint::ALL.len())]
}

/// Simulate conditions at (`lat`, `lng`) for a local wall-clock time.
pub fn compute_conditions<R>(
    lat: f64,
    lng: f64,
    local_time: NaiveDateTime,
    rng: &mut R,
) -> MarineConditions
where
    R: Rng + ?Sized,
{
    let hour = local_time.hour();
    let summer = is_summer(local_time.month());
    let daytime = is_daytime(hour);

    let base_temp = if summer { 28.0 } else { 24.0 };
    let temp_variation = if daytime { 4.0 } else { -2.0 };
    let temperature =
        base_temp + temp_variation * coastal_factor(lng) + rng.gen_range(-1.0..1.0);

    let base_wind = if summer { 10.0_f64 } else { 15.0 };
    let wind_speed = (base_wind + rng.gen_range(-5.0_f64..5.0)).max(0.0);
    let wave_height = (if summer { 0.8 } else { 1.5 }) + rng.gen_range(-0.4..0.4);

    let tide = TideState::from_hour(hour);
    let index = fishing_index(hour, tide, wind_speed, wave_height);

    let wind_direction = compass_point(rng);
    let visibility = if daytime {
        10.0 + rng.gen_range(-2.5..2.5)
    } else {
        5.0 + rng.gen_range(-1.5..1.5)
    };
    let pressure = 1010.0 + rng.gen_range(-5.0..5.0);
    let uv_index = if daytime { rng.gen_range(1..=10) } else { 0 };
    let current_speed = 0.5 + rng.gen_range(0.0..1.0);
    let current_direction = compass_point(rng);

    debug!(lat, lng, hour, fishing_index = index, "computed marine conditions");

    MarineConditions {
        temperature,
        wind_speed,
        wind_direction,
        wave_height,
        tide_state: tide,
        tide_label: tide.label().to_string(),
        visibility,
        pressure,
        uv_index,
        current_speed: Some(current_speed),
        current_direction: Some(current_direction),
        fishing_index: index,
    }
}
