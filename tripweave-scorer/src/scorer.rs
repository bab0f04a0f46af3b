//! Weight places by rating, popularity and category preference.

#![forbid(unsafe_code)]

use tripweave_core::{Place, ScoredPlace, Scorer, TripPreferences};

use crate::{CategoryWeights, TagBoosts};

/// Reviews per unit of popularity in the weight formula.
pub const REVIEWS_PER_UNIT: f64 = 1000.0;

/// Scorer computing `rating × multiplier × reviews / 1000`.
///
/// The multiplier comes from the traveller's tags via [`TagBoosts`]. Weights
/// are not clamped: a place without reviews weighs zero, a negative rating
/// gives a negative weight, and non-finite results are sanitised to zero.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripweave_core::{Category, Place, Scorer, TripPreferences};
/// use tripweave_scorer::PreferenceScorer;
///
/// let ramen = Place::new("r", "Ramen", Category::Restaurant, Coord { x: 0.0, y: 0.0 })
///     .with_rating(4.0, 500);
/// let scorer = PreferenceScorer::default();
///
/// assert_eq!(scorer.weight(&ramen, &TripPreferences::new()), 2.0);
/// assert_eq!(scorer.weight(&ramen, &TripPreferences::new().with_tag("food")), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceScorer {
    boosts: TagBoosts,
}

impl PreferenceScorer {
    /// Construct a scorer using `boosts`.
    #[must_use]
    pub const fn new(boosts: TagBoosts) -> Self {
        Self { boosts }
    }

    /// Tag rules applied by this scorer.
    #[must_use]
    pub const fn boosts(&self) -> &TagBoosts {
        &self.boosts
    }

    /// Category multipliers for `preferences`.
    #[must_use]
    pub fn weights_for(&self, preferences: &TripPreferences) -> CategoryWeights {
        CategoryWeights::from_preferences(preferences, &self.boosts)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the weight formula is a floating-point product"
    )]
    fn weigh(place: &Place, weights: &CategoryWeights) -> f64 {
        let multiplier = weights.multiplier(place.category);
        Self::sanitise(place.rating * multiplier * f64::from(place.review_count) / REVIEWS_PER_UNIT)
    }
}

impl Default for PreferenceScorer {
    fn default() -> Self {
        Self::new(TagBoosts::builtin())
    }
}

impl Scorer for PreferenceScorer {
    fn weight(&self, place: &Place, preferences: &TripPreferences) -> f64 {
        Self::weigh(place, &self.weights_for(preferences))
    }

    fn rank(&self, places: Vec<Place>, preferences: &TripPreferences) -> Vec<ScoredPlace> {
        let weights = self.weights_for(preferences);
        let mut scored: Vec<ScoredPlace> = places
            .into_iter()
            .map(|place| {
                let weight = Self::weigh(&place, &weights);
                ScoredPlace { place, weight }
            })
            .collect();
        scored.sort_by(ScoredPlace::by_descending_weight);
        scored
    }
}
