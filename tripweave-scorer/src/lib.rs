//! Preference-aware weighting for Tripweave candidate places.
//!
//! A place's weight is `rating × category multiplier × reviews / 1000`. The
//! category multipliers are derived from the traveller's interest tags by a
//! [`TagBoosts`] table: with the built-in table, `culture` or `history` raise
//! attractions to 1.5, `food` raises restaurants to 1.5, `nature` raises
//! nature spots to 1.5 and `shopping` raises experiences to 1.2. Everything
//! else stays at 1.
//!
//! [`PreferenceScorer`] implements [`Scorer`](tripweave_core::Scorer) so it
//! can be plugged into any planner.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use tripweave_core::{Category, Place, Scorer, TripPreferences};
//! use tripweave_scorer::PreferenceScorer;
//!
//! let at = Coord { x: 139.7, y: 35.7 };
//! let places = vec![
//!     Place::new("a", "Temple", Category::Attraction, at).with_rating(4.5, 1000),
//!     Place::new("r", "Sushi", Category::Restaurant, at).with_rating(4.3, 800),
//! ];
//! let ranked = PreferenceScorer::default().rank(places, &TripPreferences::new());
//! assert_eq!(ranked[0].place.id, "a");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boosts;
mod error;
mod scorer;

pub use boosts::{CategoryWeights, NEUTRAL_MULTIPLIER, TagBoost, TagBoosts};
pub use error::BoostError;
pub use scorer::{PreferenceScorer, REVIEWS_PER_UNIT};

#[cfg(test)]
mod tests;
