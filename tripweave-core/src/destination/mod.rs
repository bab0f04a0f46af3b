//! Destination configuration tables.
//!
//! Three independent tables describe destinations: [`CityAliases`] maps
//! alternative spellings onto canonical keys, [`ProfileTable`] supplies the
//! day template for each key, and an anchor table places sample places near a
//! known coordinate. [`Destinations`] bundles them so they can be swapped or
//! loaded from configuration without touching the planner.

mod aliases;
mod profile;

use std::collections::BTreeMap;

use geo::Coord;

pub use aliases::{CityAliases, normalise_key};
pub use profile::{
    DestinationProfile, ProfileTable, TransportLabel, TransportLabelError, WALK_MODE,
};

const TOKYO: Coord<f64> = Coord {
    x: 139.6503,
    y: 35.6762,
};

/// Bundle of the destination lookup tables.
///
/// # Examples
/// ```
/// use tripweave_core::Destinations;
///
/// let destinations = Destinations::builtin();
/// let resolved = destinations.resolve("오사카");
/// assert_eq!(resolved.key, "osaka");
/// assert_eq!(resolved.profile.morning_start.to_string(), "08:30");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destinations {
    /// City-name synonyms.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: CityAliases,
    /// Day templates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub profiles: ProfileTable,
    /// Base coordinates keyed by canonical destination.
    #[cfg_attr(feature = "serde", serde(default, with = "crate::coord::map"))]
    pub anchors: BTreeMap<String, Coord<f64>>,
    /// Base coordinate for destinations without an anchor.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_anchor", with = "crate::coord")
    )]
    pub fallback_anchor: Coord<f64>,
}

#[cfg(feature = "serde")]
const fn default_anchor() -> Coord<f64> {
    TOKYO
}

/// A destination after alias and profile resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDestination {
    /// Canonical key.
    pub key: String,
    /// Day template.
    pub profile: DestinationProfile,
    /// Base coordinate.
    pub anchor: Coord<f64>,
}

impl Destinations {
    /// Built-in aliases, profiles and anchors.
    #[must_use]
    pub fn builtin() -> Self {
        let anchors = [
            ("tokyo", TOKYO),
            (
                "osaka",
                Coord {
                    x: 135.5023,
                    y: 34.6937,
                },
            ),
            (
                "jeju",
                Coord {
                    x: 126.5312,
                    y: 33.4996,
                },
            ),
            (
                "paris",
                Coord {
                    x: 2.3522,
                    y: 48.8566,
                },
            ),
        ]
        .into_iter()
        .map(|(key, coord)| (key.to_owned(), coord))
        .collect();
        Self {
            aliases: CityAliases::builtin(),
            profiles: ProfileTable::builtin(),
            anchors,
            fallback_anchor: TOKYO,
        }
    }

    /// Canonical key for a destination name.
    #[must_use]
    pub fn canonical_key(&self, destination: &str) -> String {
        self.aliases.normalise(destination)
    }

    /// Resolve a destination name against every table.
    #[must_use]
    pub fn resolve(&self, destination: &str) -> ResolvedDestination {
        let key = self.canonical_key(destination);
        let profile = self.profiles.lookup(&key).clone();
        let anchor = self
            .anchors
            .get(&key)
            .copied()
            .unwrap_or(self.fallback_anchor);
        ResolvedDestination {
            key,
            profile,
            anchor,
        }
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::builtin()
    }
}
