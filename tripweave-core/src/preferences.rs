//! Trip preferences: interest tags, budget tier and pace.
//!
//! Every field is optional. Absent values resolve to named defaults:
//! [`Budget::Medium`] and [`Pace::Moderate`].

use std::collections::BTreeSet;

use thiserror::Error;

/// Spending tier used when pricing meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Budget {
    /// Street food and casual dining.
    Low,
    /// Mid-range dining.
    #[default]
    Medium,
    /// Fine dining.
    High,
}

/// How densely each day is packed with activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Pace {
    /// One activity fewer than the destination recommends, never below three.
    Relaxed,
    /// The destination's recommended count.
    #[default]
    Moderate,
    /// One activity more than the destination recommends.
    Packed,
}

impl Pace {
    /// Adjust a destination's recommended activity count for this pace.
    ///
    /// # Examples
    /// ```
    /// use tripweave_core::Pace;
    ///
    /// assert_eq!(Pace::Relaxed.adjust(5), 4);
    /// assert_eq!(Pace::Relaxed.adjust(3), 3);
    /// assert_eq!(Pace::Packed.adjust(4), 5);
    /// assert_eq!(Pace::Moderate.adjust(4), 4);
    /// ```
    #[must_use]
    pub fn adjust(self, recommended: u8) -> u8 {
        match self {
            Self::Relaxed => recommended.saturating_sub(1).max(3),
            Self::Moderate => recommended,
            Self::Packed => recommended.saturating_add(1),
        }
    }
}

/// Error returned when a budget or pace string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct PreferenceParseError {
    kind: &'static str,
    value: String,
}

impl std::str::FromStr for Budget {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(PreferenceParseError {
                kind: "budget",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::str::FromStr for Pace {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "moderate" => Ok(Self::Moderate),
            "packed" => Ok(Self::Packed),
            _ => Err(PreferenceParseError {
                kind: "pace",
                value: s.to_owned(),
            }),
        }
    }
}

/// Optional traveller preferences.
///
/// # Examples
/// ```
/// use tripweave_core::{Budget, Pace, TripPreferences};
///
/// let prefs = TripPreferences::new()
///     .with_tag("food")
///     .with_tag("Culture")
///     .with_budget(Budget::High)
///     .with_pace(Pace::Packed);
///
/// assert!(prefs.has_tag("culture"));
/// assert_eq!(prefs.budget(), Budget::High);
/// assert_eq!(TripPreferences::new().pace(), Pace::Moderate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPreferences {
    /// Free-form interest tags such as `culture`, `food`, `nature`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeSet::is_empty")
    )]
    pub tags: BTreeSet<String>,
    /// Spending tier, if stated.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub budget: Option<Budget>,
    /// Pace, if stated.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub pace: Option<Pace>,
}

impl TripPreferences {
    /// Construct empty preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interest tag, normalised to lowercase.
    #[must_use]
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.insert(tag.as_ref().trim().to_lowercase());
        self
    }

    /// Set the budget tier.
    #[must_use]
    pub const fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Set the pace.
    #[must_use]
    pub const fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = Some(pace);
        self
    }

    /// Report whether `tag` was requested, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }

    /// Budget tier, defaulting to [`Budget::Medium`].
    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget.unwrap_or_default()
    }

    /// Pace, defaulting to [`Pace::Moderate`].
    #[must_use]
    pub fn pace(&self) -> Pace {
        self.pace.unwrap_or_default()
    }
}
