//! Disablement rules for calendar cells and clock units.
//!
//! Every predicate is a pure query over its arguments. Date bounds are
//! reinterpreted keep-local as UTC before comparison, see [`crate::instant`].

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::consts::DATE_SEPARATOR;
use crate::instant::{keep_local_as_utc, month_span, normalize_day_bound};
use crate::time_range::TimeRange;
use crate::types::{IsoWeekday, Month};

/// Leap year used to validate year-less dates, so `02-29` is accepted
const ANY_LEAP_YEAR: i32 = 2000;

/// An entry of the disabled-dates list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisabledDate {
    /// `YYYY-MM-DD`, a single calendar date
    Date(NaiveDate),
    /// `MM-DD`, the same day in every year
    Annual { month: Month, day: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisabledDateError {
    #[error("Invalid disabled date format (expected YYYY-MM-DD or MM-DD): {0}")]
    InvalidFormat(String),

    #[error("Disabled date does not exist: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    ParseError(#[from] crate::ParseError),
}

impl DisabledDate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Date(disabled) => disabled == date,
            Self::Annual { month, day } => {
                u32::from(month) == date.month() && u32::from(day) == date.day()
            }
        }
    }

    fn parse_digits(part: &str, width: usize, s: &str) -> Result<u32, DisabledDateError> {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DisabledDateError::InvalidFormat(s.to_owned()));
        }
        part.parse()
            .map_err(|_| DisabledDateError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for DisabledDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Annual { month, day } => {
                write!(f, "{:02}{DATE_SEPARATOR}{day:02}", month.get())
            }
        }
    }
}

impl FromStr for DisabledDate {
    type Err = DisabledDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();

        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_digits(year, 4, trimmed)?;
                let month = Self::parse_digits(month, 2, trimmed)?;
                let day = Self::parse_digits(day, 2, trimmed)?;
                let year = i32::try_from(year)
                    .map_err(|_| DisabledDateError::InvalidFormat(trimmed.to_owned()))?;
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(Self::Date)
                    .ok_or_else(|| DisabledDateError::InvalidDate(trimmed.to_owned()))
            }
            [month, day] => {
                let month = Self::parse_digits(month, 2, trimmed)?;
                let day = Self::parse_digits(day, 2, trimmed)?;
                if NaiveDate::from_ymd_opt(ANY_LEAP_YEAR, month, day).is_none() {
                    return Err(DisabledDateError::InvalidDate(trimmed.to_owned()));
                }
                // both fit in u8 once the date exists
                let month = Month::new(u8::try_from(month).unwrap_or(0))?;
                let day = u8::try_from(day)
                    .map_err(|_| DisabledDateError::InvalidDate(trimmed.to_owned()))?;
                Ok(Self::Annual { month, day })
            }
            _ => Err(DisabledDateError::InvalidFormat(trimmed.to_owned())),
        }
    }
}

impl Serialize for DisabledDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DisabledDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether a calendar day must be rendered as non-selectable.
///
/// Checks run in order and stop at the first hit: disabled weekday,
/// disabled date (full or year-less), then the `[min_date, max_date]`
/// window compared at day granularity. A date that does not exist is
/// always disabled.
pub fn day_is_disabled(
    disabled_dates: &[DisabledDate],
    disabled_days: &[IsoWeekday],
    min_date: Option<&DateTime<FixedOffset>>,
    max_date: Option<&DateTime<FixedOffset>>,
    year: i32,
    month: u32,
    day: u32,
) -> bool {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return true;
    };

    if disabled_days.contains(&IsoWeekday::from_chrono(date.weekday())) {
        return true;
    }

    if disabled_dates.iter().any(|disabled| disabled.matches(date)) {
        return true;
    }

    let target = date.and_time(NaiveTime::MIN).and_utc();
    min_date.is_some_and(|min| target < normalize_day_bound(min))
        || max_date.is_some_and(|max| target > normalize_day_bound(max))
}

/// Whether a whole month lies outside `[min_date, max_date]`.
pub fn month_is_disabled(
    min_date: Option<&DateTime<FixedOffset>>,
    max_date: Option<&DateTime<FixedOffset>>,
    year: i32,
    month: Month,
) -> bool {
    let Some((first, next)) = month_span(year, month) else {
        return true;
    };

    // the month's last instant precedes min exactly when the next month starts at or before it
    min_date.is_some_and(|min| next <= keep_local_as_utc(min))
        || max_date.is_some_and(|max| keep_local_as_utc(max) < first)
}

/// Whether `year` lies outside the years of `min_date` and `max_date`.
pub fn year_is_disabled(
    min_date: Option<&DateTime<FixedOffset>>,
    max_date: Option<&DateTime<FixedOffset>>,
    year: i32,
) -> bool {
    min_date.is_some_and(|min| year < min.year()) || max_date.is_some_and(|max| year > max.year())
}

/// Whether an hour must be rendered as non-selectable.
///
/// Any range covering the whole hour disables it (see
/// [`TimeRange::disables_hour`] for the boundary rule); otherwise the plain
/// `min`/`max` bound applies. `_current_minute` does not take part in the
/// verdict and is accepted so hour and minute checks share a call shape.
pub fn hour_is_disabled<'a>(
    min: Option<u32>,
    max: Option<u32>,
    hour: u32,
    _current_minute: u32,
    disabled_times: impl IntoIterator<Item = &'a TimeRange>,
) -> bool {
    disabled_times
        .into_iter()
        .any(|range| range.disables_hour(hour))
        || component_is_disabled(min, max, hour)
}

/// Whether a minute of `current_hour` must be rendered as non-selectable.
pub fn minute_is_disabled<'a>(
    min: Option<u32>,
    max: Option<u32>,
    minute: u32,
    current_hour: u32,
    disabled_times: impl IntoIterator<Item = &'a TimeRange>,
) -> bool {
    disabled_times
        .into_iter()
        .any(|range| range.disables_minute(minute, current_hour))
        || component_is_disabled(min, max, minute)
}

/// Plain bound check for units without disabled ranges, e.g. seconds.
pub fn component_is_disabled<T: PartialOrd>(min: Option<T>, max: Option<T>, value: T) -> bool {
    min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bound, disabled_dates, month, time_range, weekdays};

    #[test]
    fn test_disabled_date_parse() {
        assert_eq!(
            "2024-12-25".parse::<DisabledDate>().unwrap(),
            DisabledDate::Date(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap())
        );
        assert_eq!(
            "12-25".parse::<DisabledDate>().unwrap(),
            DisabledDate::Annual {
                month: month(12),
                day:   25,
            }
        );
        assert!("02-29".parse::<DisabledDate>().is_ok());
    }

    #[test]
    fn test_disabled_date_parse_rejects_malformed() {
        for input in ["", "2024", "2024-1-05", "24-12-25", "12-5", "2024-02-30", "13-01", "00-10", "ab-cd", "2024-12-25-01"] {
            assert!(input.parse::<DisabledDate>().is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_disabled_date_display_round_trips() {
        for input in ["2024-01-05", "01-05"] {
            assert_eq!(input.parse::<DisabledDate>().unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_day_disabled_by_weekday() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday
        let days = weekdays(&[6, 7]);
        assert!(day_is_disabled(&[], &days, None, None, 2024, 1, 6));
        assert!(day_is_disabled(&[], &days, None, None, 2024, 1, 7));
        assert!(!day_is_disabled(&[], &days, None, None, 2024, 1, 8));
    }

    #[test]
    fn test_day_disabled_year_less_date_matches_every_year() {
        let dates = disabled_dates(&["12-25"]);
        for year in [2023, 2024, 2099] {
            assert!(day_is_disabled(&dates, &[], None, None, year, 12, 25), "{year}-12-25");
            assert!(!day_is_disabled(&dates, &[], None, None, year, 12, 24), "{year}-12-24");
        }
    }

    #[test]
    fn test_day_disabled_full_date_matches_one_year() {
        let dates = disabled_dates(&["2024-07-04"]);
        assert!(day_is_disabled(&dates, &[], None, None, 2024, 7, 4));
        assert!(!day_is_disabled(&dates, &[], None, None, 2025, 7, 4));
    }

    #[test]
    fn test_day_min_bound_is_inclusive() {
        let min = bound("2024-01-10");
        assert!(day_is_disabled(&[], &[], Some(&min), None, 2024, 1, 9));
        assert!(!day_is_disabled(&[], &[], Some(&min), None, 2024, 1, 10));
        assert!(!day_is_disabled(&[], &[], Some(&min), None, 2024, 1, 11));
    }

    #[test]
    fn test_day_max_bound_is_inclusive() {
        let max = bound("2024-01-10T18:30:00Z");
        assert!(!day_is_disabled(&[], &[], None, Some(&max), 2024, 1, 10));
        assert!(day_is_disabled(&[], &[], None, Some(&max), 2024, 1, 11));
    }

    #[test]
    fn test_day_bound_keeps_local_wall_clock() {
        // 00:30 local on the 10th is the 9th in UTC; the local date must win
        let min = bound("2024-01-10T00:30:00+02:00");
        assert!(day_is_disabled(&[], &[], Some(&min), None, 2024, 1, 9));
        assert!(!day_is_disabled(&[], &[], Some(&min), None, 2024, 1, 10));

        let max = bound("2024-01-10T23:30:00-05:00");
        assert!(!day_is_disabled(&[], &[], None, Some(&max), 2024, 1, 10));
        assert!(day_is_disabled(&[], &[], None, Some(&max), 2024, 1, 11));
    }

    #[test]
    fn test_day_nonexistent_is_disabled() {
        assert!(day_is_disabled(&[], &[], None, None, 2023, 2, 29));
        assert!(!day_is_disabled(&[], &[], None, None, 2024, 2, 29));
    }

    #[test]
    fn test_month_is_disabled() {
        let min = bound("2024-03-15");
        let max = bound("2024-06-10");
        assert!(month_is_disabled(Some(&min), Some(&max), 2024, month(2)));
        assert!(!month_is_disabled(Some(&min), Some(&max), 2024, month(3)));
        assert!(!month_is_disabled(Some(&min), Some(&max), 2024, month(6)));
        assert!(month_is_disabled(Some(&min), Some(&max), 2024, month(7)));
        assert!(!month_is_disabled(None, None, 1850, month(1)));
    }

    #[test]
    fn test_month_last_instant_boundary() {
        let min = bound("2024-01-31T12:00:00Z");
        assert!(!month_is_disabled(Some(&min), None, 2024, month(1)));

        let min = bound("2024-02-01");
        assert!(month_is_disabled(Some(&min), None, 2024, month(1)));
        assert!(!month_is_disabled(Some(&min), None, 2024, month(2)));
    }

    #[test]
    fn test_year_is_disabled() {
        let min = bound("2020-06-01");
        let max = bound("2030-02-01");
        assert!(year_is_disabled(Some(&min), Some(&max), 2019));
        assert!(!year_is_disabled(Some(&min), Some(&max), 2020));
        assert!(!year_is_disabled(Some(&min), Some(&max), 2025));
        assert!(!year_is_disabled(Some(&min), Some(&max), 2030));
        assert!(year_is_disabled(Some(&min), Some(&max), 2031));
        assert!(!year_is_disabled(None, Some(&max), 1));
        assert!(!year_is_disabled(Some(&min), None, 9999));
    }

    #[test]
    fn test_hour_is_disabled_ranges() {
        let full = [time_range("9:00-11:59")];
        assert!(hour_is_disabled(None, None, 10, 0, &full));

        let partial = [time_range("9:30-11:59")];
        assert!(!hour_is_disabled(None, None, 9, 0, &partial));
        assert!(hour_is_disabled(None, None, 11, 0, &partial));
    }

    #[test]
    fn test_hour_is_disabled_any_range_matches() {
        let ranges = [time_range("1:15-2:15"), time_range("18:00-18:30")];
        assert!(hour_is_disabled(None, None, 18, 0, &ranges));
        assert!(!hour_is_disabled(None, None, 1, 0, &ranges));
    }

    #[test]
    fn test_hour_falls_back_to_bounds() {
        assert!(hour_is_disabled(Some(8), Some(17), 7, 0, std::iter::empty()));
        assert!(!hour_is_disabled(Some(8), Some(17), 8, 0, std::iter::empty()));
        assert!(!hour_is_disabled(Some(8), Some(17), 17, 0, std::iter::empty()));
        assert!(hour_is_disabled(Some(8), Some(17), 18, 0, std::iter::empty()));
        assert!(!hour_is_disabled(None, None, 0, 0, std::iter::empty()));
    }

    #[test]
    fn test_minute_is_disabled() {
        let ranges = [time_range("9:30-11:15")];
        assert!(!minute_is_disabled(None, None, 29, 9, &ranges));
        assert!(minute_is_disabled(None, None, 30, 9, &ranges));
        assert!(minute_is_disabled(None, None, 45, 10, &ranges));
        assert!(minute_is_disabled(None, None, 15, 11, &ranges));
        assert!(!minute_is_disabled(None, None, 16, 11, &ranges));
        assert!(minute_is_disabled(Some(20), None, 10, 12, &ranges));
        assert!(minute_is_disabled(None, Some(40), 50, 12, &ranges));
    }

    #[test]
    fn test_component_is_disabled() {
        assert!(!component_is_disabled(None, None, 30));
        assert!(component_is_disabled(Some(10), None, 9));
        assert!(!component_is_disabled(Some(10), Some(20), 10));
        assert!(!component_is_disabled(Some(10), Some(20), 20));
        assert!(component_is_disabled(Some(10), Some(20), 21));
    }
}
