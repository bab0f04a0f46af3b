//! Travel-leg estimates between consecutive stops.

use geo::Coord;
use tripweave_core::{TransportLabel, WALK_MODE, haversine_km};

use crate::TravelSpeeds;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Estimated movement between two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelLeg {
    /// Whole minutes, rounded up.
    pub minutes: u16,
    /// Mode label shown on the arriving item.
    pub mode: String,
}

impl TravelSpeeds {
    /// Estimate the leg from `from` to `to` using the destination's labels.
    ///
    /// Legs longer than the long-haul threshold use the label's first mode,
    /// medium legs its second mode, and short legs walk.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripweave_core::TransportLabel;
    /// use tripweave_planner::TravelSpeeds;
    ///
    /// let label: TransportLabel = "train/bus".parse()?;
    /// let shinjuku = Coord { x: 139.7005, y: 35.6905 };
    /// let yokohama = Coord { x: 139.6380, y: 35.4437 };
    /// let leg = TravelSpeeds::default().leg(shinjuku, yokohama, &label);
    /// assert_eq!(leg.mode, "train");
    /// assert!(leg.minutes > 50 && leg.minutes < 60);
    /// # Ok::<(), tripweave_core::TransportLabelError>(())
    /// ```
    #[must_use]
    pub fn leg(&self, from: Coord<f64>, to: Coord<f64>, label: &TransportLabel) -> TravelLeg {
        let distance_km = haversine_km(from, to);
        let (kmh, mode) = if distance_km > self.long_haul_above_km {
            (self.long_haul_kmh, label.long_haul())
        } else if distance_km > self.short_hop_above_km {
            (self.short_hop_kmh, label.short_hop())
        } else {
            (self.walking_kmh, WALK_MODE)
        };
        TravelLeg {
            minutes: travel_minutes(distance_km, kmh),
            mode: mode.to_owned(),
        }
    }
}

/// Minutes needed to cover `distance_km` at `kmh`, rounded up.
///
/// Degenerate input (non-finite, negative or a non-positive speed) yields
/// zero; results beyond `u16::MAX` saturate.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting a distance and speed into minutes"
)]
pub fn travel_minutes(distance_km: f64, kmh: f64) -> u16 {
    if kmh <= 0.0 {
        return 0;
    }
    let minutes = (distance_km / kmh * MINUTES_PER_HOUR).ceil();
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0;
    }
    if minutes >= f64::from(u16::MAX) {
        return u16::MAX;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a whole number checked to lie within u16"
    )]
    let whole = minutes as u16;
    whole
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn label() -> TransportLabel {
        TransportLabel::new("train", Some("bus".to_owned()))
    }

    #[rstest]
    #[case(0.0, 5.0, 0)]
    #[case(1.0, 5.0, 12)]
    #[case(1.43, 5.0, 18)]
    #[case(6.0, 15.0, 24)]
    #[case(45.0, 30.0, 90)]
    #[case(f64::NAN, 5.0, 0)]
    #[case(1.0, 0.0, 0)]
    #[case(1.0e9, 5.0, u16::MAX)]
    fn rounds_minutes_up(#[case] km: f64, #[case] kmh: f64, #[case] expected: u16) {
        assert_eq!(travel_minutes(km, kmh), expected);
    }

    #[rstest]
    fn short_legs_walk() {
        let from = Coord { x: 139.6503, y: 35.6762 };
        let to = Coord { x: 139.6603, y: 35.6862 };
        let leg = TravelSpeeds::default().leg(from, to, &label());
        assert_eq!(leg.mode, WALK_MODE);
        assert_eq!(leg.minutes, 18);
    }

    #[rstest]
    fn medium_legs_use_second_mode() {
        let from = Coord { x: 139.6503, y: 35.6762 };
        let to = Coord { x: 139.7003, y: 35.6762 };
        let leg = TravelSpeeds::default().leg(from, to, &label());
        assert_eq!(leg.mode, "bus");
        // ~4.52 km at 15 km/h
        assert_eq!(leg.minutes, 19);
    }

    #[rstest]
    fn medium_legs_walk_without_second_mode() {
        let from = Coord { x: 139.6503, y: 35.6762 };
        let to = Coord { x: 139.7003, y: 35.6762 };
        let single = TransportLabel::new("ferry", None);
        assert_eq!(TravelSpeeds::default().leg(from, to, &single).mode, WALK_MODE);
    }

    #[rstest]
    fn long_legs_use_first_mode() {
        let tokyo = Coord { x: 139.6503, y: 35.6762 };
        let osaka = Coord { x: 135.5023, y: 34.6937 };
        let leg = TravelSpeeds::default().leg(tokyo, osaka, &label());
        assert_eq!(leg.mode, "train");
        // ~392.4 km at 30 km/h
        assert_eq!(leg.minutes, 785);
    }
}
