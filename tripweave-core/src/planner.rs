//! Planner trait and request type.

use crate::{Itinerary, Place, TripPreferences};

/// Parameters for a planning run.
///
/// The request owns its candidate places: a planner consumes them while
/// scheduling, so callers that need the list afterwards must clone it first.
///
/// # Examples
/// ```rust
/// use tripweave_core::{PlanRequest, TripPreferences};
///
/// let request = PlanRequest::new("Tokyo", 3)
///     .with_preferences(TripPreferences::new().with_tag("food"));
/// assert_eq!(request.days, 3);
/// assert!(request.places.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Destination name; matched case-insensitively after trimming.
    pub destination: String,
    /// Number of days to plan. Zero yields an empty itinerary.
    pub days: u16,
    /// Traveller preferences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: TripPreferences,
    /// Candidate places. When empty, planners synthesise a sample set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub places: Vec<Place>,
}

impl PlanRequest {
    /// Construct a request without preferences or places.
    pub fn new(destination: impl Into<String>, days: u16) -> Self {
        Self {
            destination: destination.into(),
            days,
            preferences: TripPreferences::default(),
            places: Vec::new(),
        }
    }

    /// Set the preferences.
    #[must_use]
    pub fn with_preferences(mut self, preferences: TripPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Set the candidate places.
    #[must_use]
    pub fn with_places(mut self, places: Vec<Place>) -> Self {
        self.places = places;
        self
    }
}

/// Build a day-by-day itinerary from a request.
///
/// Planning is total: every request yields an itinerary, possibly empty.
/// Planners are pure computations with no I/O and must be `Send + Sync` so
/// they can be shared across threads.
pub trait Planner: Send + Sync {
    /// Plan a trip, consuming the request's candidate places.
    fn plan(&self, request: PlanRequest) -> Itinerary;
}
