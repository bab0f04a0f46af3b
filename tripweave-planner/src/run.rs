//! Set-up shared by every planning policy.

use tripweave_core::{Budget, DestinationProfile, PlanRequest, Scorer};

use crate::{CandidatePool, PlannerConfig, sample_places};

/// Everything one planning run owns.
#[derive(Debug)]
pub(crate) struct PlanningRun {
    pub(crate) days: u16,
    pub(crate) profile: DestinationProfile,
    pub(crate) budget: Budget,
    pub(crate) activities_per_day: usize,
    pub(crate) pool: CandidatePool,
}

impl PlanningRun {
    /// Resolve the destination, fill an empty candidate list with samples and
    /// rank the candidates into a fresh pool.
    pub(crate) fn prepare<C: Scorer>(
        scorer: &C,
        config: &PlannerConfig,
        request: PlanRequest,
    ) -> Self {
        let PlanRequest {
            destination,
            days,
            preferences,
            places,
        } = request;
        let resolved = config.destinations.resolve(&destination);
        let places = if places.is_empty() {
            log::warn!(
                "no candidate places for '{destination}'; using samples near {}",
                resolved.key
            );
            sample_places(&resolved.key, resolved.anchor)
        } else {
            places
        };
        let activities_per_day =
            usize::from(preferences.pace().adjust(resolved.profile.activities_per_day));
        let pool = CandidatePool::from_ranked(scorer.rank(places, &preferences));
        log::debug!(
            "planning {days} day(s) in {} from {} candidate(s), {activities_per_day} per day",
            resolved.key,
            pool.len()
        );
        Self {
            days,
            profile: resolved.profile,
            budget: preferences.budget(),
            activities_per_day,
            pool,
        }
    }
}
