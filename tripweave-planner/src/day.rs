//! Running state for the day being scheduled.

use geo::Coord;
use tripweave_core::{Budget, ClockTime, DayItinerary, DestinationProfile, ItineraryItem, Place};

use crate::PlannerConfig;

/// Clock, position and items of one day.
///
/// The first stop of a day has no inbound travel and no transport label;
/// every later stop is reached from the previous one.
#[derive(Debug)]
pub(crate) struct DayCursor<'a> {
    config: &'a PlannerConfig,
    profile: &'a DestinationProfile,
    budget: Budget,
    now: ClockTime,
    position: Option<Coord<f64>>,
    items: Vec<ItineraryItem>,
}

impl<'a> DayCursor<'a> {
    pub(crate) fn start(
        config: &'a PlannerConfig,
        profile: &'a DestinationProfile,
        budget: Budget,
    ) -> Self {
        Self {
            config,
            profile,
            budget,
            now: profile.morning_start,
            position: None,
            items: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn now(&self) -> ClockTime {
        self.now
    }

    pub(crate) const fn position(&self) -> Option<Coord<f64>> {
        self.position
    }

    pub(crate) fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Report whether the clock has reached the destination's evening end.
    pub(crate) fn past_curfew(&self) -> bool {
        self.now >= self.profile.evening_end
    }

    /// Report whether the current hour prefers a meal.
    pub(crate) fn in_meal_window(&self) -> bool {
        self.config.meal_windows.is_meal_hour(self.now.hour())
    }

    /// Travel to `place`, spend its activity time there and record the item.
    pub(crate) fn visit(&mut self, place: Place) {
        self.visit_not_before(place, ClockTime::MIDNIGHT);
    }

    /// Like [`DayCursor::visit`], but arrive no earlier than `earliest`.
    pub(crate) fn visit_not_before(&mut self, place: Place, earliest: ClockTime) {
        let transport = self.position.map(|from| {
            let leg = self
                .config
                .speeds
                .leg(from, place.location, &self.profile.transport);
            self.now = self.now.plus_minutes(leg.minutes);
            leg.mode
        });
        self.now = self.now.max(earliest);
        let start_time = self.now;
        self.now = self
            .now
            .plus_minutes(self.config.durations.for_category(place.category));
        let cost = self.config.costs.cost(&place, self.budget);
        let note = place.note().map(str::to_owned);
        log::trace!(
            "scheduled {} ({}) {start_time}-{}",
            place.id,
            place.category,
            self.now
        );
        self.position = Some(place.location);
        self.items.push(ItineraryItem {
            title: place.name,
            place_id: Some(place.id),
            start_time,
            end_time: self.now,
            transport,
            cost,
            note,
            location: Some(place.location),
        });
    }

    /// Close the day; days without items yield `None`.
    pub(crate) fn finish(self, day: u16) -> Option<DayItinerary> {
        (!self.items.is_empty()).then(|| DayItinerary {
            day,
            items: self.items,
        })
    }
}
