//! Wall-clock times within a single trip day.

use thiserror::Error;

const MINUTES_PER_HOUR: u16 = 60;

/// Minutes since midnight, rendered as `HH:MM`.
///
/// Times are never wrapped into the next day: a visit that runs past midnight
/// renders with an hour of 24 or more.
///
/// # Examples
/// ```
/// use tripweave_core::ClockTime;
///
/// let start: ClockTime = "08:30".parse()?;
/// assert_eq!(start.minutes(), 510);
/// assert_eq!(start.hour(), 8);
/// assert_eq!(start.plus_minutes(95).to_string(), "10:05");
/// # Ok::<(), tripweave_core::ClockTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

/// Errors returned when parsing a [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    /// The input was not of the form `HH:MM`.
    #[error("time '{0}' is not in HH:MM form")]
    Malformed(String),
    /// The minute component was 60 or more.
    #[error("minute component of '{0}' must be below 60")]
    MinuteOutOfRange(String),
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self(0);

    /// Construct from an hour and minute.
    ///
    /// # Errors
    /// Returns [`ClockTimeError::MinuteOutOfRange`] when `minute >= 60`.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, ClockTimeError> {
        if u16::from(minute) >= MINUTES_PER_HOUR {
            return Err(ClockTimeError::MinuteOutOfRange(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self(
            u16::from(hour) * MINUTES_PER_HOUR + u16::from(minute),
        ))
    }

    /// Construct from minutes since midnight.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Whole hours since midnight.
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0.div_euclid(MINUTES_PER_HOUR)
    }

    /// Advance by `minutes`, saturating at the representable maximum.
    #[must_use]
    pub const fn plus_minutes(self, minutes: u16) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0.div_euclid(MINUTES_PER_HOUR);
        let minutes = self.0.rem_euclid(MINUTES_PER_HOUR);
        write!(f, "{hours:02}:{minutes:02}")
    }
}

impl std::str::FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockTimeError::Malformed(s.to_owned());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour: u16 = hours.parse().map_err(|_| malformed())?;
        let minute: u16 = minutes.parse().map_err(|_| malformed())?;
        if minutes.len() != 2 {
            return Err(malformed());
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(ClockTimeError::MinuteOutOfRange(s.to_owned()));
        }
        hour.checked_mul(MINUTES_PER_HOUR)
            .and_then(|base| base.checked_add(minute))
            .map(Self)
            .ok_or_else(malformed)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
