//! Planner filling a fixed grid of daily slots.

use tripweave_core::{
    Category, ClockTime, DayItinerary, Itinerary, PlanRequest, Planner, ScoredPlace, Scorer,
};
use tripweave_scorer::PreferenceScorer;

use crate::day::DayCursor;
use crate::run::PlanningRun;
use crate::{CandidatePool, PlannerConfig};

/// One slot of the daily grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Earliest start of the slot's activity.
    pub earliest: ClockTime,
    /// Whether the slot is reserved for a meal.
    pub meal: bool,
}

impl Slot {
    /// Activity slot starting no earlier than `earliest`.
    #[must_use]
    pub const fn activity(earliest: ClockTime) -> Self {
        Self {
            earliest,
            meal: false,
        }
    }

    /// Meal slot starting no earlier than `earliest`.
    #[must_use]
    pub const fn meal(earliest: ClockTime) -> Self {
        Self {
            earliest,
            meal: true,
        }
    }
}

/// The default grid: 09:00, lunch at 12:00, 14:00, 16:00 and dinner at 18:00.
#[must_use]
pub fn default_slots() -> Vec<Slot> {
    vec![
        Slot::activity(ClockTime::from_minutes(9 * 60)),
        Slot::meal(ClockTime::from_minutes(12 * 60)),
        Slot::activity(ClockTime::from_minutes(14 * 60)),
        Slot::activity(ClockTime::from_minutes(16 * 60)),
        Slot::meal(ClockTime::from_minutes(18 * 60)),
    ]
}

/// Planner assigning places to the same slots every day.
///
/// Meal slots take the highest-weight restaurant and other slots the
/// highest-weight place that is not a restaurant; either falls back to the
/// highest-weight place of any kind. An activity starts at its slot time or,
/// if the previous activity plus travel runs late, as soon as it can. Pace,
/// activity targets and the evening end are ignored.
///
/// # Examples
/// ```
/// use tripweave_core::{PlanRequest, Planner};
/// use tripweave_planner::FixedSlotPlanner;
///
/// let itinerary = FixedSlotPlanner::default().plan(PlanRequest::new("Paris", 1));
/// let first = &itinerary.days()[0].items[0];
/// assert_eq!(first.start_time.to_string(), "09:00");
/// ```
#[derive(Debug, Clone)]
pub struct FixedSlotPlanner<C = PreferenceScorer>
where
    C: Scorer,
{
    scorer: C,
    config: PlannerConfig,
    slots: Vec<Slot>,
}

impl<C: Scorer> FixedSlotPlanner<C> {
    /// Construct a planner with the default grid and configuration.
    pub fn new(scorer: C) -> Self {
        Self::with_config(scorer, PlannerConfig::default(), default_slots())
    }

    /// Construct a planner with an explicit grid and configuration.
    pub const fn with_config(scorer: C, config: PlannerConfig, slots: Vec<Slot>) -> Self {
        Self {
            scorer,
            config,
            slots,
        }
    }

    /// Daily grid in use.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn plan_day(&self, day: u16, run: &mut PlanningRun) -> Option<DayItinerary> {
        let mut cursor = DayCursor::start(&self.config, &run.profile, run.budget);
        for slot in &self.slots {
            let Some(scored) = pick(&mut run.pool, slot.meal) else {
                break;
            };
            cursor.visit_not_before(scored.place, slot.earliest);
        }
        log::debug!(
            "day {day}: {} slot(s) filled, {} candidate(s) left",
            cursor.item_count(),
            run.pool.len()
        );
        cursor.finish(day)
    }
}

fn pick(pool: &mut CandidatePool, meal: bool) -> Option<ScoredPlace> {
    let wanted = |entry: &ScoredPlace| (entry.place.category == Category::Restaurant) == meal;
    pool.take_first_where(wanted).or_else(|| pool.take_first())
}

impl Default for FixedSlotPlanner<PreferenceScorer> {
    fn default() -> Self {
        Self::new(PreferenceScorer::default())
    }
}

impl<C: Scorer> Planner for FixedSlotPlanner<C> {
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
