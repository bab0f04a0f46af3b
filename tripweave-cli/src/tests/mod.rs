//! Shared test harness modules for the Tripweave CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

mod helpers;
mod plan_unit;
