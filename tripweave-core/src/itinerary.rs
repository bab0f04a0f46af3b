//! Planned itineraries.
//!
//! An [`Itinerary`] is the ordered list of [`DayItinerary`] values produced
//! by a [`Planner`](crate::Planner). Days are numbered from one and only days
//! that received at least one item are present.

use geo::Coord;

use crate::ClockTime;

/// One scheduled activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ItineraryItem {
    /// Display title, usually the place name.
    pub title: String,
    /// Identifier of the source place.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub place_id: Option<String>,
    /// Arrival at the place.
    pub start_time: ClockTime,
    /// Departure from the place.
    pub end_time: ClockTime,
    /// Mode used to reach the place; absent for the first stop of a day.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub transport: Option<String>,
    /// Estimated cost in whole currency units; absent when free.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cost: Option<u32>,
    /// Description or address of the place.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub note: Option<String>,
    /// Position carried forward for map rendering.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "position",
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::coord::option"
        )
    )]
    pub location: Option<Coord<f64>>,
}

/// The activities planned for one day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayItinerary {
    /// One-based day number.
    pub day: u16,
    /// Activities in chronological order.
    pub items: Vec<ItineraryItem>,
}

/// A complete multi-day plan.
///
/// # Examples
/// ```
/// use tripweave_core::{ClockTime, DayItinerary, Itinerary, ItineraryItem};
///
/// let item = ItineraryItem {
///     title: "Senso-ji".into(),
///     place_id: Some("t1".into()),
///     start_time: ClockTime::from_minutes(480),
///     end_time: ClockTime::from_minutes(600),
///     transport: None,
///     cost: Some(5_000),
///     note: None,
///     location: None,
/// };
/// let itinerary = Itinerary::new(vec![DayItinerary { day: 1, items: vec![item] }]);
///
/// assert_eq!(itinerary.len(), 1);
/// assert_eq!(itinerary.item_count(), 1);
/// assert_eq!(itinerary.total_cost(), 5_000);
/// assert_eq!(itinerary.place_ids().collect::<Vec<_>>(), vec!["t1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Itinerary {
    days: Vec<DayItinerary>,
}

impl Itinerary {
    /// Construct an itinerary from planned days.
    #[must_use]
    pub const fn new(days: Vec<DayItinerary>) -> Self {
        Self { days }
    }

    /// Construct an itinerary with no days.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Planned days in ascending order.
    #[must_use]
    pub fn days(&self) -> &[DayItinerary] {
        &self.days
    }

    /// Number of planned days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Report whether nothing was planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of activities across all days.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }

    /// Source place identifiers in visiting order.
    pub fn place_ids(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .flat_map(|day| day.items.iter())
            .filter_map(|item| item.place_id.as_deref())
    }

    /// Sum of all item costs.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.days
            .iter()
            .flat_map(|day| day.items.iter())
            .filter_map(|item| item.cost)
            .map(u64::from)
            .sum()
    }

    /// Consume the wrapper and return the planned days.
    #[must_use]
    pub fn into_days(self) -> Vec<DayItinerary> {
        self.days
    }
}

impl From<Vec<DayItinerary>> for Itinerary {
    fn from(days: Vec<DayItinerary>) -> Self {
        Self::new(days)
    }
}

impl IntoIterator for Itinerary {
    type Item = DayItinerary;
    type IntoIter = std::vec::IntoIter<DayItinerary>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cost: Option<u32>) -> ItineraryItem {
        ItineraryItem {
            title: id.to_owned(),
            place_id: Some(id.to_owned()),
            start_time: ClockTime::from_minutes(540),
            end_time: ClockTime::from_minutes(600),
            transport: None,
            cost,
            note: None,
            location: None,
        }
    }

    #[test]
    fn aggregates_across_days() {
        let itinerary = Itinerary::new(vec![
            DayItinerary {
                day: 1,
                items: vec![item("a", Some(25_000)), item("b", None)],
            },
            DayItinerary {
                day: 2,
                items: vec![item("c", Some(5_000))],
            },
        ]);
        assert_eq!(itinerary.item_count(), 3);
        assert_eq!(itinerary.total_cost(), 30_000);
        assert_eq!(itinerary.place_ids().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_itinerary_has_no_days() {
        let itinerary = Itinerary::empty();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_cost(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_without_absent_fields() {
        let day = DayItinerary {
            day: 1,
            items: vec![item("a", None)],
        };
        let json = serde_json::to_value(Itinerary::new(vec![day])).unwrap();
        let first = &json[0]["items"][0];
        assert_eq!(first["startTime"], "09:00");
        assert_eq!(first["placeId"], "a");
        assert!(first.get("cost").is_none());
        assert!(first.get("transport").is_none());
    }
}
