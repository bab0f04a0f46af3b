//! The depleting set of places a planning run draws from.
//!
//! One pool is owned by one planning run and shared across all of its days.
//! Entries stay in descending weight order; taking a place removes it so it
//! can never be scheduled twice.

use std::cmp::Ordering;

use geo::Coord;
use tripweave_core::{Category, ScoredPlace, haversine_km};

/// Ranked candidates for one planning run.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    entries: Vec<ScoredPlace>,
}

impl CandidatePool {
    /// Wrap candidates already sorted by descending weight.
    #[must_use]
    pub const fn from_ranked(entries: Vec<ScoredPlace>) -> Self {
        Self { entries }
    }

    /// Remaining candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report whether any restaurant remains.
    #[must_use]
    pub fn has_restaurant(&self) -> bool {
        self.entries.iter().any(is_restaurant)
    }

    /// Remove and return the highest-weight candidate.
    pub fn take_first(&mut self) -> Option<ScoredPlace> {
        self.take_at(0)
    }

    /// Remove the first candidate matching `predicate`.
    pub fn take_first_where(
        &mut self,
        predicate: impl Fn(&ScoredPlace) -> bool,
    ) -> Option<ScoredPlace> {
        let index = self.entries.iter().position(predicate)?;
        self.take_at(index)
    }

    /// Remove the restaurant nearest to `position`.
    ///
    /// Without a position, the highest-weight restaurant is taken. Ties
    /// favour the higher-weight candidate.
    pub fn take_restaurant(&mut self, position: Option<Coord<f64>>) -> Option<ScoredPlace> {
        let Some(here) = position else {
            return self.take_first_where(is_restaurant);
        };
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| is_restaurant(entry))
            .map(|(index, entry)| (index, haversine_km(here, entry.place.location)))
            .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
            .map(|(index, _)| index)?;
        self.take_at(index)
    }

    /// Remove the candidate with the lowest distance-to-weight ratio.
    ///
    /// Closer and heavier candidates win. Candidates without positive weight
    /// rank behind every weighted one and are ordered among themselves by
    /// distance. Without a position, the highest-weight candidate is taken.
    pub fn take_nearest_weighted(&mut self, position: Option<Coord<f64>>) -> Option<ScoredPlace> {
        let Some(here) = position else {
            return self.take_first();
        };
        let index = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, Proximity::new(here, entry)))
            .min_by(|(_, lhs), (_, rhs)| lhs.cmp_key(rhs))
            .map(|(index, _)| index)?;
        self.take_at(index)
    }

    fn take_at(&mut self, index: usize) -> Option<ScoredPlace> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

fn is_restaurant(entry: &ScoredPlace) -> bool {
    entry.place.category == Category::Restaurant
}

#[derive(Debug, Clone, Copy)]
struct Proximity {
    ratio: f64,
    distance_km: f64,
}

impl Proximity {
    #[expect(
        clippy::float_arithmetic,
        reason = "proximity ranks candidates by distance over weight"
    )]
    fn new(here: Coord<f64>, entry: &ScoredPlace) -> Self {
        let distance_km = haversine_km(here, entry.place.location);
        let ratio = if entry.weight > 0.0 {
            distance_km / entry.weight
        } else {
            f64::INFINITY
        };
        Self { ratio, distance_km }
    }

    fn cmp_key(&self, other: &Self) -> Ordering {
        self.ratio
            .total_cmp(&other.ratio)
            .then_with(|| self.distance_km.total_cmp(&other.distance_km))
    }
}
