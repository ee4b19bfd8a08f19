//! Procedural fishing spot generation

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::geo::Coordinates;
use crate::models::{FishingSpot, RestrictionReason, Season, TimeOfDay};

/// Degrees of offset per kilometre of search radius.
///
/// Treats one degree as 100 km on both axes; longitude is not scaled by
/// latitude.
pub const DEGREES_PER_KM: f64 = 0.01;

/// Default search radius in km
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

pub const OVERFISHED_PROBABILITY: f64 = 0.10;
pub const RESTRICTED_PROBABILITY: f64 = 0.05;

/// Rating penalty for overfished spots
pub const OVERFISHED_PENALTY: u8 = 4;

/// Common catch in Tamil Nadu waters
pub static SPECIES_CATALOG: [&str; 12] = [
    "Seer Fish (Vanjaram)",
    "Indian Mackerel (Kanangeluthi)",
    "Tuna (Choora)",
    "Sardine (Mathi)",
    "Pomfret (Vavval)",
    "Red Snapper (Sankara)",
    "Barracuda (Sheela)",
    "Kingfish (Neimeen)",
    "Anchovy (Nethili)",
    "Shark (Sura)",
    "Crab (Nandu)",
    "Prawn (Eral)",
];

pub static NAME_PREFIXES: [&str; 8] = [
    "North", "South", "East", "West", "Deep", "Shallow", "Rocky", "Sandy",
];

pub static NAME_SUFFIXES: [&str; 7] = ["Point", "Reef", "Bank", "Shoal", "Ridge", "Channel", "Bay"];

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Draw 1-3 items, dropping repeats. Never empty.
fn pick_distinct<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Copy + PartialEq,
    R: Rng + ?Sized,
{
    let draws = rng.gen_range(1..=3);
    let mut picked = Vec::with_capacity(draws);
    for _ in 0..draws {
        let item = *pick(items, rng);
        if !picked.contains(&item) {
            picked.push(item);
        }
    }
    picked
}

/// Rating after the overfishing penalty, never below 1
pub fn effective_rating(base: u8, overfished: bool) -> u8 {
    if overfished {
        base.saturating_sub(OVERFISHED_PENALTY).max(1)
    } else {
        base
    }
}

/// Generate 5-8 fishing spots scattered around (`lat`, `lng`).
///
/// Each coordinate is offset independently by up to `radius_km` worth of
/// degrees (see [`DEGREES_PER_KM`]). `today` anchors the last reported
/// dates, which fall within the preceding 30 days.
pub fn generate_spots<R>(
    lat: f64,
    lng: f64,
    radius_km: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<FishingSpot>
where
    R: Rng + ?Sized,
{
    let count = 5 + rng.gen_range(0..=3);
    let max_offset = radius_km * DEGREES_PER_KM;

    let spots: Vec<FishingSpot> = (0..count)
        .map(|i| {
            let lat_offset = rng.gen_range(-1.0..=1.0) * max_offset;
            let lng_offset = rng.gen_range(-1.0..=1.0) * max_offset;

            let species: Vec<String> = pick_distinct(&SPECIES_CATALOG, rng)
                .into_iter()
                .map(str::to_string)
                .collect();

            let overfished = rng.gen_bool(OVERFISHED_PROBABILITY);
            let restricted = rng.gen_bool(RESTRICTED_PROBABILITY);

            let species_word = species[0].split_whitespace().next().unwrap_or_default();
            let name = format!(
                "{} {} {}",
                pick(&NAME_PREFIXES, rng),
                species_word,
                pick(&NAME_SUFFIXES, rng)
            );

            let best_time_of_day = *pick(&TimeOfDay::ALL, rng);
            let best_seasons = pick_distinct(&Season::ALL, rng);

            let base_rating = 5 + rng.gen_range(0..=5);
            let current_rating = effective_rating(base_rating, overfished);

            let days_ago = rng.gen_range(0..30);
            let last_reported_date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);

            let restriction_reason = restricted.then(|| *pick(&RestrictionReason::ALL, rng));

            FishingSpot {
                id: format!("spot-{i}"),
                name,
                coordinates: Coordinates::new(lat + lat_offset, lng + lng_offset),
                species,
                best_time_of_day,
                best_seasons,
                current_rating,
                base_rating,
                last_reported_date,
                overfished,
                restricted,
                restriction_reason,
            }
        })
        .collect();

    debug!(lat, lng, radius_km, count = spots.len(), "generated fishing spots");
    spots
}
