//! Test-only helpers for building places and scoring them deterministically.

use geo::Coord;

use crate::{Category, Place, Scorer, TripPreferences};

/// Build a place at `(lat, lng)` with a rating and review count.
///
/// The name mirrors the identifier so assertions can use either.
#[must_use]
pub fn place_at(
    id: &str,
    category: Category,
    rating: f64,
    review_count: u32,
    lat: f64,
    lng: f64,
) -> Place {
    Place::new(id, id, category, Coord { x: lng, y: lat }).with_rating(rating, review_count)
}

/// Build `count` places of one category spread east of `(lat, lng)`.
///
/// Each place sits roughly 100 m further east and has one fewer review than
/// its predecessor, so higher indices weigh less.
#[must_use]
pub fn place_row(prefix: &str, category: Category, count: u16, lat: f64, lng: f64) -> Vec<Place> {
    (0..count)
        .map(|index| {
            let step = f64::from(index);
            #[expect(clippy::float_arithmetic, reason = "test fixture offsets")]
            let east = lng + step * 0.001;
            place_at(
                &format!("{prefix}-{index}"),
                category,
                4.0,
                1_000_u32.saturating_sub(u32::from(index)),
                lat,
                east,
            )
        })
        .collect()
}

/// Scorer that ranks places by review count alone.
#[derive(Debug, Copy, Clone, Default)]
pub struct ReviewCountScorer;

impl Scorer for ReviewCountScorer {
    fn weight(&self, place: &Place, _preferences: &TripPreferences) -> f64 {
        f64::from(place.review_count)
    }
}

/// Scorer returning the same weight for every place.
#[derive(Debug, Copy, Clone)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn weight(&self, _place: &Place, _preferences: &TripPreferences) -> f64 {
        Self::sanitise(self.0)
    }
}
