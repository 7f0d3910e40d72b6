use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Parsed from and rendered as 24h `"HH:MM"`. Ordering is chronological, so
/// interval checks can compare values directly.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct TimeOfDay(u16);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time must look like HH:MM, got {0:?}")]
    Format(String),
    #[error("hour out of range in {0:?}")]
    Hour(String),
    #[error("minute out of range in {0:?}")]
    Minute(String),
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(h) || h.len() > 2 || !digits(m) || m.len() != 2 {
            return Err(TimeParseError::Format(s.to_string()));
        }
        let hour: u8 = h.parse().map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u8 = m.parse().map_err(|_| TimeParseError::Format(s.to_string()))?;
        if hour > 23 {
            return Err(TimeParseError::Hour(s.to_string()));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(s.to_string()));
        }
        Ok(TimeOfDay(hour as u16 * 60 + minute as u16))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Teaching day. Serialised as its index, 0 = Monday through 5 = Saturday.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("day index must be 0..=5 (Mon..Sat), got {0}")]
pub struct WeekdayError(pub u8);

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = WeekdayError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Weekday::ALL
            .get(v as usize)
            .copied()
            .ok_or(WeekdayError(v))
    }
}

impl From<Weekday> for u8 {
    fn from(d: Weekday) -> u8 {
        d.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        };
        f.write_str(s)
    }
}
