//! Inter-city transport options and their ranking.

use std::cmp::Ordering;

use crate::Place;

/// Vehicle class of a transport option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TransportMode {
    /// Scheduled flight.
    Plane,
    /// Rail service.
    Train,
    /// Coach service.
    Bus,
}

/// One leg of a transport option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransportSegment {
    /// Departure station or airport code.
    pub from: String,
    /// Arrival station or airport code.
    pub to: String,
    /// Departure time as published, e.g. `09:20`.
    pub depart: String,
    /// Arrival time as published.
    pub arrive: String,
    /// Operating carrier.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub carrier: Option<String>,
    /// Flight or service number.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub flight_number: Option<String>,
}

/// A bookable way of reaching the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransportOption {
    /// Vehicle class.
    pub mode: TransportMode,
    /// Marketing carrier.
    pub carrier: String,
    /// Door-to-door duration in minutes.
    pub total_minutes: u32,
    /// Fare in whole currency units.
    pub total_cost: u32,
    /// Number of changes.
    pub transfers: u8,
    /// Legs in travel order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub segments: Vec<TransportSegment>,
    /// Whether a cancelled seat was released.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cancellation_available: bool,
    /// Whether the fare is discounted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub discounted: bool,
}

/// Keys for ranking transport options, cheapest/fastest/most direct first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TransportSort {
    /// Ascending fare.
    #[default]
    Cost,
    /// Ascending duration.
    Duration,
    /// Ascending number of changes.
    Transfers,
}

impl TransportSort {
    /// Compare two options under this key.
    #[must_use]
    pub fn compare(self, lhs: &TransportOption, rhs: &TransportOption) -> Ordering {
        match self {
            Self::Cost => lhs.total_cost.cmp(&rhs.total_cost),
            Self::Duration => lhs.total_minutes.cmp(&rhs.total_minutes),
            Self::Transfers => lhs.transfers.cmp(&rhs.transfers),
        }
    }
}

impl std::str::FromStr for TransportSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cost" => Ok(Self::Cost),
            "duration" => Ok(Self::Duration),
            "transfers" => Ok(Self::Transfers),
            _ => Err(format!("unknown transport sort '{s}'")),
        }
    }
}

/// Sort options in place by `key`. Equal options keep their order.
///
/// # Examples
/// ```
/// use tripweave_core::{TransportMode, TransportOption, TransportSort, rank_transport};
///
/// let option = |carrier: &str, minutes, cost| TransportOption {
///     mode: TransportMode::Plane,
///     carrier: carrier.into(),
///     total_minutes: minutes,
///     total_cost: cost,
///     transfers: 0,
///     segments: Vec::new(),
///     cancellation_available: false,
///     discounted: false,
/// };
/// let mut options = vec![option("A", 150, 205_000), option("B", 140, 165_000)];
/// rank_transport(&mut options, TransportSort::Cost);
/// assert_eq!(options[0].carrier, "B");
/// ```
pub fn rank_transport(options: &mut [TransportOption], key: TransportSort) {
    options.sort_by(|lhs, rhs| key.compare(lhs, rhs));
}

/// Keys for ranking places, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceSort {
    /// Descending rating.
    #[default]
    Rating,
    /// Descending review count.
    ReviewCount,
}

/// Sort places in place by `key`, best first. Equal places keep their order.
pub fn rank_places(places: &mut [Place], key: PlaceSort) {
    match key {
        PlaceSort::Rating => places.sort_by(|lhs, rhs| {
            rhs.rating
                .partial_cmp(&lhs.rating)
                .unwrap_or(Ordering::Equal)
        }),
        PlaceSort::ReviewCount => places.sort_by(|lhs, rhs| rhs.review_count.cmp(&lhs.review_count)),
    }
}
