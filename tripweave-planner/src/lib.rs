//! Day-by-day schedulers for Tripweave.
//!
//! This crate provides two [`Planner`](tripweave_core::Planner)
//! implementations that turn a ranked list of candidate places into a
//! timed, multi-day [`Itinerary`](tripweave_core::Itinerary):
//!
//! - [`GreedyPlanner`] walks a running clock through each day, preferring
//!   the nearest restaurant during meal hours and otherwise the candidate
//!   with the best distance-to-weight ratio from the current position.
//! - [`FixedSlotPlanner`] fills the same grid of slots every day from the
//!   highest-weight candidates.
//!
//! Both consume one shared pool, so a place is scheduled at most once per
//! trip. Requests without candidate places fall back to three synthesised
//! [`sample_places`] around the destination anchor. Travel time between stops
//! comes from great-circle distance and the speed bands in [`TravelSpeeds`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod day;
mod fixed_slot;
mod greedy;
mod pool;
mod run;
mod samples;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod travel;

pub use config::{
    ActivityDurations, CostTable, HourWindow, MealWindows, PlannerConfig, TravelSpeeds,
};
pub use fixed_slot::{FixedSlotPlanner, Slot, default_slots};
pub use greedy::GreedyPlanner;
pub use pool::CandidatePool;
pub use samples::sample_places;
pub use travel::{TravelLeg, travel_minutes};
