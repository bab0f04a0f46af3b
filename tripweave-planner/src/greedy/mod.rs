//! Time-of-day aware greedy planner.

use tripweave_core::{DayItinerary, Itinerary, PlanRequest, Planner, Scorer};
use tripweave_scorer::PreferenceScorer;

use crate::PlannerConfig;
use crate::day::DayCursor;
use crate::run::PlanningRun;

/// Greedy planner filling each day from a shared, depleting pool.
///
/// Each step looks at the running clock. During meal hours the nearest
/// restaurant is taken if one remains; otherwise the candidate with the best
/// distance-to-weight ratio from the current position is taken. The first
/// stop of a day is chosen by weight alone. A day ends when its activity
/// target is met, the clock reaches the destination's evening end, or the
/// pool runs dry. Later days get whatever earlier days left behind.
///
/// # Examples
/// ```
/// use tripweave_core::{PlanRequest, Planner};
/// use tripweave_planner::GreedyPlanner;
///
/// let itinerary = GreedyPlanner::default().plan(PlanRequest::new("Tokyo", 2));
/// // Three sample places are synthesised for an empty request.
/// assert_eq!(itinerary.item_count(), 3);
/// assert_eq!(itinerary.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<C = PreferenceScorer>
where
    C: Scorer,
{
    scorer: C,
    config: PlannerConfig,
}

impl<C: Scorer> GreedyPlanner<C> {
    /// Construct a planner using default configuration.
    pub fn new(scorer: C) -> Self {
        Self::with_config(scorer, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(scorer: C, config: PlannerConfig) -> Self {
        Self { scorer, config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn plan_day(&self, day: u16, run: &mut PlanningRun) -> Option<DayItinerary> {
        let mut cursor = DayCursor::start(&self.config, &run.profile, run.budget);
        while cursor.item_count() < run.activities_per_day && !cursor.past_curfew() {
            let next = if cursor.in_meal_window() && run.pool.has_restaurant() {
                run.pool.take_restaurant(cursor.position())
            } else {
                run.pool.take_nearest_weighted(cursor.position())
            };
            let Some(scored) = next else {
                break;
            };
            cursor.visit(scored.place);
        }
        log::debug!(
            "day {day}: {} item(s), {} candidate(s) left",
            cursor.item_count(),
            run.pool.len()
        );
        cursor.finish(day)
    }
}

impl Default for GreedyPlanner<PreferenceScorer> {
    fn default() -> Self {
        Self::new(PreferenceScorer::default())
    }
}

impl<C: Scorer> Planner for GreedyPlanner<C> {
    fn plan(&self, request: PlanRequest) -> Itinerary {
        if request.days == 0 {
            return Itinerary::empty();
        }
        let mut run = PlanningRun::prepare(&self.scorer, &self.config, request);
        let days: Vec<DayItinerary> = (1..=run.days)
            .filter_map(|day| self.plan_day(day, &mut run))
            .collect();
        Itinerary::new(days)
    }
}
