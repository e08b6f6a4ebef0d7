//! Zone-normalized date construction and ISO parsing.
//!
//! Bounds arrive as offset-carrying instants. Before a bound is compared
//! with a calendar cell its local wall-clock fields are reinterpreted as UTC,
//! so `2024-01-01T00:00+05:00` compares as UTC midnight on January 1st.

use crate::types::{IsoWeekday, Month};
use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Offset-carrying layouts accepted besides strict RFC 3339
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Offset-free layouts, read as UTC
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses ISO 8601 text and converts it to UTC.
///
/// Returns `None` for anything that is not a valid date or date-time.
pub fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    parse_iso_keep_offset(text).map(|dt| dt.with_timezone(&Utc))
}

/// Parses ISO 8601 text, keeping the offset it was written with.
///
/// Text without an offset is taken to be UTC.
pub fn parse_iso_keep_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt);
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        });

    match naive {
        Some(naive) => Some(naive.and_utc().fixed_offset()),
        None => {
            tracing::trace!(input = trimmed, "text is not an ISO date/time");
            None
        }
    }
}

/// Truncates the time of day to midnight, keeping the zone.
pub fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = dt.date_naive().and_time(NaiveTime::MIN);
    dt.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| dt.clone())
}

/// Reads the wall-clock fields of `dt` as if they were written in UTC.
pub fn keep_local_as_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Utc> {
    dt.naive_local().and_utc()
}

/// A bound prepared for day-level comparison: keep-local UTC, start of day.
pub fn normalize_day_bound<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Utc> {
    start_of_day(&keep_local_as_utc(dt))
}

/// UTC midnight of the given calendar date, `None` if the date does not exist.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Half-open span `[first instant, first instant of next month)` in UTC.
pub fn month_span(year: i32, month: Month) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = utc_midnight(year, month.into(), 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some((first, next))
}

/// Number of days in the month, `None` outside the supported year range.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let (first, next) = month_span(year, month)?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// ISO weekday of the given date, `None` if the date does not exist.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<IsoWeekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| IsoWeekday::from_chrono(date.weekday()))
}
