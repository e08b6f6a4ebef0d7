//! Builders for test fixtures.

use chrono::{DateTime, FixedOffset};

use crate::instant::parse_iso_keep_offset;
use crate::rules::DisabledDate;
use crate::time_range::TimeRange;
use crate::types::{IsoWeekday, Month, WeekStart};

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid month")
}

pub fn week_start(value: u8) -> WeekStart {
    WeekStart::new(value).expect("valid week start")
}

pub fn weekdays(values: &[u8]) -> Vec<IsoWeekday> {
    values
        .iter()
        .map(|&value| IsoWeekday::new(value).expect("valid weekday"))
        .collect()
}

pub fn bound(text: &str) -> DateTime<FixedOffset> {
    parse_iso_keep_offset(text).unwrap_or_else(|| panic!("invalid ISO bound {text:?}"))
}

pub fn disabled_dates(values: &[&str]) -> Vec<DisabledDate> {
    values
        .iter()
        .map(|value| value.parse().expect("valid disabled date"))
        .collect()
}

pub fn time_range(text: &str) -> TimeRange {
    text.parse().expect("valid time range")
}
