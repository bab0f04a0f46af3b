//! Proptest strategies and invariant checks for planner property tests.
//!
//! Generated places cluster around central Tokyo so every policy sees a mix of
//! walking, short-hop and occasionally long-haul legs.

use std::collections::HashSet;

use proptest::prelude::*;
use tripweave_core::test_support::place_at;
use tripweave_core::{Category, Itinerary, Place};

/// Strategy for a list of places with unique identifiers.
pub fn place_set_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Vec<Place>> {
    proptest::collection::vec(place_strategy(), min_count..=max_count).prop_map(|places| {
        places
            .into_iter()
            .enumerate()
            .map(|(index, place)| Place {
                id: format!("place-{index}"),
                ..place
            })
            .collect()
    })
}

/// Strategy for one place; the caller assigns the identifier.
fn place_strategy() -> impl Strategy<Value = Place> {
    let category = prop_oneof![
        Just(Category::Restaurant),
        Just(Category::Attraction),
        Just(Category::Nature),
        Just(Category::Experience),
        Just(Category::Other),
    ];
    (
        category,
        0.0_f64..=5.0_f64,
        0_u32..5_000_u32,
        35.60_f64..35.75_f64,
        139.60_f64..139.80_f64,
    )
        .prop_map(|(category, rating, reviews, lat, lng)| {
            place_at("", category, rating, reviews, lat, lng)
        })
}

/// Identifiers of `places`.
#[must_use]
pub fn ids_of(places: &[Place]) -> HashSet<String> {
    places.iter().map(|place| place.id.clone()).collect()
}

/// Assert the structural guarantees shared by every planner.
///
/// Days are numbered ascending within the trip and never empty; each
/// scheduled place is a candidate and appears once per trip; items within a
/// day never overlap; only the first item of a day lacks a transport mode.
pub fn assert_well_formed(
    itinerary: &Itinerary,
    days: u16,
    candidates: &HashSet<String>,
) -> Result<(), TestCaseError> {
    prop_assert!(itinerary.len() <= usize::from(days));
    let mut seen = HashSet::new();
    let mut last_day = 0;
    for day in itinerary.days() {
        prop_assert!(day.day > last_day && day.day <= days, "day {}", day.day);
        last_day = day.day;
        prop_assert!(!day.items.is_empty(), "day {} is empty", day.day);
        for (index, item) in day.items.iter().enumerate() {
            let id = item.place_id.clone().unwrap_or_default();
            prop_assert!(candidates.contains(&id), "'{}' is not a candidate", id);
            prop_assert!(seen.insert(id.clone()), "'{}' scheduled twice", id);
            prop_assert!(item.start_time <= item.end_time);
            prop_assert_eq!(index == 0, item.transport.is_none());
        }
        for pair in day.items.windows(2) {
            if let [previous, next] = pair {
                prop_assert!(previous.end_time <= next.start_time);
            }
        }
    }
    Ok(())
}
