//! Minute-resolution time-of-day values.
//!
//! A [`TimePoint`] counts whole minutes since midnight. Input arrives either as
//! a clock string (`"9:00"`, `"09:00"`) or as a raw minute count, and is
//! validated against the `[0, 2400]` numeric range accepted by schedule files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{HuddleError, Result};

/// A time specification as it appears in a schedule file, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    /// Minutes since midnight. Fractional minutes are truncated toward zero.
    Minutes(f64),
    /// A clock string in `H:MM` or `HH:MM` form.
    Clock(String),
}

/// Whole minutes since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct TimePoint(u32);

impl TimePoint {
    pub const MIN: TimePoint = TimePoint(0);

    /// The largest accepted value. Schedule files treat 2400 as the numeric
    /// ceiling, so it doubles as the "end of day" sentinel.
    pub const MAX: TimePoint = TimePoint(2400);

    /// Build a point from a minute count, truncating any fractional part.
    pub fn from_minutes(minutes: f64) -> Result<Self> {
        let truncated = minutes.trunc();
        if !truncated.is_finite()
            || truncated < f64::from(Self::MIN.0)
            || truncated > f64::from(Self::MAX.0)
            || truncated.fract() != 0.0
        {
            return Err(HuddleError::InvalidTimeFormat(format!(
                "{minutes} became {truncated}"
            )));
        }
        Ok(TimePoint(truncated as u32))
    }

    /// The minute count as an integer.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Callers must have already checked `minutes <= MAX`.
    #[inline]
    pub(crate) const fn from_validated(minutes: u32) -> Self {
        TimePoint(minutes)
    }
}

impl FromStr for TimePoint {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || HuddleError::InvalidTimeFormat(format!("{s:?}"));
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hours.is_empty() || hours.len() > 2 || !all_digits(hours) {
            return Err(invalid());
        }
        if minutes.len() != 2 || !all_digits(minutes) {
            return Err(invalid());
        }

        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }

        let total = hours * 60 + minutes;
        if total > Self::MAX.0 {
            return Err(HuddleError::InvalidTimeFormat(format!("{s:?} became {total}")));
        }
        Ok(TimePoint(total))
    }
}

impl TryFrom<&RawTime> for TimePoint {
    type Error = HuddleError;

    fn try_from(raw: &RawTime) -> Result<Self> {
        match raw {
            RawTime::Minutes(minutes) => TimePoint::from_minutes(*minutes),
            RawTime::Clock(clock) => clock.parse(),
        }
    }
}

impl TryFrom<u32> for TimePoint {
    type Error = HuddleError;

    fn try_from(minutes: u32) -> Result<Self> {
        TimePoint::from_minutes(f64::from(minutes))
    }
}

/// Renders as `H:MM`: hours unpadded, minutes zero-padded.
impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
