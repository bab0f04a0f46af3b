//! Test-only utilities for `tripweave-planner`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use tripweave_core::{Itinerary, ItineraryItem};

/// Render an item as `"id HH:MM-HH:MM transport"`, with `-` for no transport.
#[must_use]
pub fn item_summary(item: &ItineraryItem) -> String {
    format!(
        "{} {}-{} {}",
        item.place_id.as_deref().unwrap_or("?"),
        item.start_time,
        item.end_time,
        item.transport.as_deref().unwrap_or("-"),
    )
}

/// Summaries of every item, grouped by day.
#[must_use]
pub fn day_summaries(itinerary: &Itinerary) -> Vec<Vec<String>> {
    itinerary
        .days()
        .iter()
        .map(|day| day.items.iter().map(item_summary).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tripweave_core::{ClockTime, DayItinerary};

    #[rstest]
    fn summaries_group_items_by_day() {
        let item = |id: &str, start: u16, transport: Option<&str>| ItineraryItem {
            title: id.to_owned(),
            place_id: Some(id.to_owned()),
            start_time: ClockTime::from_minutes(start),
            end_time: ClockTime::from_minutes(start.saturating_add(60)),
            transport: transport.map(str::to_owned),
            cost: None,
            note: None,
            location: None,
        };
        let itinerary = Itinerary::new(vec![
            DayItinerary {
                day: 1,
                items: vec![item("a", 540, None), item("b", 610, Some("walk"))],
            },
            DayItinerary {
                day: 3,
                items: vec![item("c", 480, None)],
            },
        ]);

        assert_eq!(
            day_summaries(&itinerary),
            [
                vec!["a 09:00-10:00 -", "b 10:10-11:10 walk"],
                vec!["c 08:00-09:00 -"],
            ]
        );
    }
}
