//! Core domain types for the Tripweave itinerary engine.
//!
//! The crate defines the data a planner works on ([`Place`],
//! [`TripPreferences`], [`Itinerary`]), the destination tables that shape a
//! day, and the [`Scorer`], [`Planner`] and [`PlaceSource`] seams implemented
//! by the other workspace crates. Everything here is a pure computation; the
//! only I/O lives behind [`PlaceSource`].
//!
//! Coordinates use [`geo::Coord`] with `x = longitude` and `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod clock;
#[cfg(feature = "serde")]
mod coord;
pub mod destination;
mod distance;
mod itinerary;
mod place;
mod planner;
mod preferences;
mod scorer;
mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod transport;

pub use clock::{ClockTime, ClockTimeError};
pub use destination::{
    CityAliases, DestinationProfile, Destinations, ProfileTable, ResolvedDestination,
    TransportLabel, TransportLabelError, WALK_MODE, normalise_key,
};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use itinerary::{DayItinerary, Itinerary, ItineraryItem};
pub use place::{Category, Place};
pub use planner::{PlanRequest, Planner};
pub use preferences::{Budget, Pace, PreferenceParseError, TripPreferences};
pub use scorer::{ScoredPlace, Scorer};
pub use source::{Catalog, PlaceSource, PlaceSourceError};
pub use transport::{
    PlaceSort, TransportMode, TransportOption, TransportSegment, TransportSort, rank_places,
    rank_transport,
};
