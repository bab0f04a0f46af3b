//! Errors raised while configuring tag boosts.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building a [`TagBoosts`](crate::TagBoosts) table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoostError {
    /// The tag was empty or whitespace.
    #[error("boost tag must not be empty")]
    EmptyTag,
    /// The multiplier was negative or not finite.
    #[error("multiplier {multiplier} for tag '{tag}' must be finite and non-negative")]
    InvalidMultiplier {
        /// Tag the multiplier was configured for.
        tag: String,
        /// Rejected value.
        multiplier: f64,
    },
}
