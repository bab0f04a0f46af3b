//! Per-destination day templates.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::ClockTime;

/// Mode label used for short walking legs.
pub const WALK_MODE: &str = "walk";

/// Two-part transport label such as `"train/walk"`.
///
/// The first part names the mode used for long legs, the optional second part
/// the mode used for medium legs.
///
/// # Examples
/// ```
/// use tripweave_core::TransportLabel;
///
/// let label: TransportLabel = "rental-car/taxi".parse()?;
/// assert_eq!(label.long_haul(), "rental-car");
/// assert_eq!(label.short_hop(), "taxi");
///
/// let single: TransportLabel = "ferry".parse()?;
/// assert_eq!(single.short_hop(), "walk");
/// # Ok::<(), tripweave_core::TransportLabelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportLabel {
    long_haul: String,
    short_hop: Option<String>,
}

/// Errors returned when parsing a [`TransportLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportLabelError {
    /// The label had no long-haul part.
    #[error("transport label '{0}' has no long-haul mode")]
    MissingLongHaul(String),
}

impl TransportLabel {
    /// Construct a label from its parts.
    pub fn new(long_haul: impl Into<String>, short_hop: Option<String>) -> Self {
        Self {
            long_haul: long_haul.into(),
            short_hop: short_hop.filter(|mode| !mode.trim().is_empty()),
        }
    }

    /// Mode for long legs.
    #[must_use]
    pub fn long_haul(&self) -> &str {
        &self.long_haul
    }

    /// Mode for medium legs, or [`WALK_MODE`] when the label has one part.
    #[must_use]
    pub fn short_hop(&self) -> &str {
        self.short_hop.as_deref().unwrap_or(WALK_MODE)
    }
}

impl std::fmt::Display for TransportLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.short_hop {
            Some(short) => write!(f, "{}/{short}", self.long_haul),
            None => f.write_str(&self.long_haul),
        }
    }
}

impl std::str::FromStr for TransportLabel {
    type Err = TransportLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (long, short) = s
            .split_once('/')
            .map_or((s, None), |(long, short)| (long, Some(short)));
        let long = long.trim();
        if long.is_empty() {
            return Err(TransportLabelError::MissingLongHaul(s.to_owned()));
        }
        Ok(Self::new(long, short.map(|mode| mode.trim().to_owned())))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TransportLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TransportLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Day template for a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DestinationProfile {
    /// When each day begins.
    pub morning_start: ClockTime,
    /// No new activity starts once the clock reaches this time.
    pub evening_end: ClockTime,
    /// Recommended number of activities per day.
    pub activities_per_day: u8,
    /// Transport modes for long and medium legs.
    pub transport: TransportLabel,
}

impl DestinationProfile {
    /// Profile applied to destinations without an entry:
    /// `09:00`-`20:00`, four activities, `public-transit/walk`.
    #[must_use]
    pub fn generic() -> Self {
        profile(540, 1200, 4, "public-transit", "walk")
    }
}

impl Default for DestinationProfile {
    fn default() -> Self {
        Self::generic()
    }
}

fn profile(start: u16, end: u16, activities: u8, long: &str, short: &str) -> DestinationProfile {
    DestinationProfile {
        morning_start: ClockTime::from_minutes(start),
        evening_end: ClockTime::from_minutes(end),
        activities_per_day: activities,
        transport: TransportLabel::new(long, Some(short.to_owned())),
    }
}

/// Destination profiles keyed by canonical destination name.
///
/// # Examples
/// ```
/// use tripweave_core::{DestinationProfile, ProfileTable};
///
/// let table = ProfileTable::builtin();
/// assert_eq!(table.lookup("tokyo").activities_per_day, 5);
/// assert_eq!(table.lookup("atlantis"), &DestinationProfile::generic());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileTable {
    /// Profiles keyed by canonical destination.
    #[cfg_attr(feature = "serde", serde(default))]
    pub profiles: BTreeMap<String, DestinationProfile>,
    /// Profile for destinations without an entry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fallback: DestinationProfile,
}

impl ProfileTable {
    /// Built-in profiles for the supported cities.
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = [
            ("tokyo", profile(480, 1260, 5, "train", "walk")),
            ("osaka", profile(510, 1290, 5, "train", "walk")),
            ("jeju", profile(540, 1140, 4, "rental-car", "taxi")),
            ("busan", profile(540, 1200, 4, "subway", "walk")),
            ("paris", profile(540, 1320, 5, "metro", "walk")),
            ("fukuoka", profile(540, 1260, 4, "subway", "walk")),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect();
        Self {
            profiles,
            fallback: DestinationProfile::generic(),
        }
    }

    /// Insert or replace the profile for a canonical destination key.
    pub fn insert(&mut self, key: impl Into<String>, profile: DestinationProfile) {
        self.profiles.insert(key.into(), profile);
    }

    /// Profile for a canonical key, or the fallback.
    #[must_use]
    pub fn lookup(&self, key: &str) -> &DestinationProfile {
        self.profiles.get(key).unwrap_or(&self.fallback)
    }
}
