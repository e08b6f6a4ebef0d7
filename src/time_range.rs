use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_HOUR, MAX_MINUTE, TIME_RANGE_SEPARATOR, TIME_SEPARATOR};

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour:   u8,
    minute: u8,
}

impl TimeOfDay {
    /// # Errors
    /// Returns `TimeRangeError::InvalidTime` if the hour is above 23 or the minute above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeRangeError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE {
            return Err(TimeRangeError::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TIME_SEPARATOR}{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeRangeError::InvalidTime(s.trim().to_owned());
        let (hour, minute) = s.trim().split_once(TIME_SEPARATOR).ok_or_else(invalid)?;
        let hour = hour.trim().parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

/// A span of the day to disable, both ends inclusive, written `H:MM-H:MM`.
///
/// The start may lie after the end (`22:00-6:59`); the hour and minute
/// checks then apply their clauses to each end independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: TimeOfDay,
    end:   TimeOfDay,
}

/// Error type for disabled time range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeRangeError {
    /// Hour or minute missing, non-numeric or out of range.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// Invalid range format.
    #[error("Invalid time range format: {0}")]
    InvalidFormat(String),
}

impl TimeRange {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Whole-hour check.
    ///
    /// A boundary hour only counts when the range covers all of it, which is
    /// judged solely by a start minute of 0 or an end minute of 59. Hours
    /// strictly inside the range always count.
    pub fn disables_hour(&self, hour: u32) -> bool {
        let start = u32::from(self.start.hour);
        let end = u32::from(self.end.hour);
        (hour == start && self.start.minute == 0)
            || (hour == end && self.end.minute == MAX_MINUTE)
            || (hour > start && hour < end)
    }

    /// Minute check with the hour already chosen.
    pub fn disables_minute(&self, minute: u32, current_hour: u32) -> bool {
        let start = u32::from(self.start.hour);
        let end = u32::from(self.end.hour);
        (current_hour == start && minute >= u32::from(self.start.minute))
            || (current_hour == end && minute <= u32::from(self.end.minute))
            || (current_hour > start && current_hour < end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TIME_RANGE_SEPARATOR}{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(TIME_RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(TimeRangeError::InvalidFormat(format!(
                "No range separator found (expected '{TIME_RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(TIME_RANGE_SEPARATOR).ok_or_else(|| {
                    TimeRangeError::InvalidFormat(format!(
                        "Separator '{TIME_RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                Ok(Self::new(start.parse()?, end.parse()?))
            }
            _ => Err(TimeRangeError::InvalidFormat(format!(
                "Too many '{TIME_RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
