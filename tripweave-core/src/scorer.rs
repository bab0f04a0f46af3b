//! Weight candidate places for a traveller's preferences.
//!
//! The `Scorer` trait assigns a weight to a [`Place`](crate::Place) given the
//! caller's [`TripPreferences`](crate::TripPreferences). Weights are sort
//! keys: they are recomputed for every planning run and never persisted.

use std::cmp::Ordering;

use crate::{Place, TripPreferences};

/// Calculate a weight for a candidate place.
///
/// Higher weights indicate a more desirable place. Implementations must be
/// thread-safe (`Send` + `Sync`) and infallible: missing information yields
/// `0.0`.
///
/// Implementations must produce finite (`f64::is_finite`) weights; use
/// [`Scorer::sanitise`] to apply this guard. Weights are not clamped, so a
/// negative rating yields a negative weight that ranks behind every
/// non-negative one.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use tripweave_core::{Category, Place, Scorer, TripPreferences};
///
/// struct RatingScorer;
///
/// impl Scorer for RatingScorer {
///     fn weight(&self, place: &Place, _preferences: &TripPreferences) -> f64 {
///         Self::sanitise(place.rating)
///     }
/// }
///
/// let place = Place::new("p", "Park", Category::Nature, Coord { x: 0.0, y: 0.0 })
///     .with_rating(4.0, 10);
/// assert_eq!(RatingScorer.weight(&place, &TripPreferences::new()), 4.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a weight for `place` according to `preferences`.
    fn weight(&self, place: &Place, preferences: &TripPreferences) -> f64;

    /// Replace non-finite weights with `0.0`, leaving finite ones untouched.
    #[must_use]
    fn sanitise(weight: f64) -> f64
    where
        Self: Sized,
    {
        if weight.is_finite() { weight } else { 0.0 }
    }

    /// Weigh every place and sort the result by descending weight.
    ///
    /// The sort is stable: places with equal weight keep their input order.
    fn rank(&self, places: Vec<Place>, preferences: &TripPreferences) -> Vec<ScoredPlace> {
        let mut scored: Vec<ScoredPlace> = places
            .into_iter()
            .map(|place| {
                let weight = self.weight(&place, preferences);
                ScoredPlace { place, weight }
            })
            .collect();
        scored.sort_by(ScoredPlace::by_descending_weight);
        scored
    }
}

/// A place annotated with its weight for one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlace {
    /// The candidate place.
    pub place: Place,
    /// Derived weight; higher is better.
    pub weight: f64,
}

impl ScoredPlace {
    /// Ordering placing heavier places first.
    #[must_use]
    pub fn by_descending_weight(lhs: &Self, rhs: &Self) -> Ordering {
        rhs.weight
            .partial_cmp(&lhs.weight)
            .unwrap_or(Ordering::Equal)
    }
}
