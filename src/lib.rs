//! Facade crate for the Tripweave itinerary engine.
//!
//! This crate re-exports the core domain types and, behind the `planner`
//! feature (on by default), the preference scorer and both scheduling
//! policies.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "planner")]
//! # {
//! use tripweave::{GreedyPlanner, PlanRequest, Planner, TripPreferences};
//!
//! let request = PlanRequest::new("Osaka", 2)
//!     .with_preferences(TripPreferences::new().with_tag("food"));
//! let itinerary = GreedyPlanner::default().plan(request);
//! assert!(itinerary.len() <= 2);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use tripweave_core::{
    Budget, Catalog, Category, ClockTime, DayItinerary, Destinations, Itinerary, ItineraryItem,
    Pace, Place, PlaceSource, PlaceSourceError, PlanRequest, Planner, ScoredPlace, Scorer,
    TransportOption, TransportSort, TripPreferences, haversine_km, rank_places, rank_transport,
};

#[cfg(feature = "planner")]
pub use tripweave_planner::{FixedSlotPlanner, GreedyPlanner, PlannerConfig};
#[cfg(feature = "planner")]
pub use tripweave_scorer::PreferenceScorer;
