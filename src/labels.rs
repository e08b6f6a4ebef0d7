//! Ordered label and value sequences shown by the picker.

use crate::consts::{
    DAYS_PER_WEEK, HOURS_PER_DAY, MINUTES_PER_HOUR, PAD_THRESHOLD, YEAR_WINDOW_RADIUS,
};
use crate::ParseError;
use crate::prelude::*;
use crate::types::{IsoWeekday, Month, Step, WeekStart};

/// Source of localized weekday and month names.
///
/// Implementations return names in whatever case the locale uses; the
/// label builders capitalize the first character.
pub trait CalendarNames {
    /// Short weekday name, e.g. `"Mon"`
    fn weekday_short(&self, weekday: chrono::Weekday) -> String;

    /// Full month name, e.g. `"January"`
    fn month_long(&self, month: chrono::Month) -> String;
}

/// English names as provided by chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl CalendarNames for EnglishNames {
    fn weekday_short(&self, weekday: chrono::Weekday) -> String {
        weekday.to_string()
    }

    fn month_long(&self, month: chrono::Month) -> String {
        month.name().to_owned()
    }
}

/// Uppercases the first character, leaving the rest unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Seven short weekday names rotated so `week_start` comes first.
pub fn weekday_labels(week_start: WeekStart) -> Vec<String> {
    weekday_labels_with(&EnglishNames, week_start)
}

pub fn weekday_labels_with(names: &impl CalendarNames, week_start: WeekStart) -> Vec<String> {
    let mut labels: Vec<String> = (1..=DAYS_PER_WEEK)
        .filter_map(|n| IsoWeekday::new(n).ok())
        .map(|weekday| capitalize(&names.weekday_short(weekday.to_chrono())))
        .collect();
    labels.rotate_left(week_start.offset());
    labels
}

/// Twelve month names, January first.
pub fn month_labels() -> Vec<String> {
    month_labels_with(&EnglishNames)
}

pub fn month_labels_with(names: &impl CalendarNames) -> Vec<String> {
    Month::all()
        .map(|month| capitalize(&names.month_long(month.to_chrono())))
        .collect()
}

fn stepped(span: u32, step: Step) -> Vec<u32> {
    let step = step.get();
    (0..span.div_ceil(step)).map(|index| index * step).collect()
}

/// `0, step, 2*step, ...` below 24.
pub fn hour_values(step: Step) -> Vec<u32> {
    stepped(HOURS_PER_DAY, step)
}

/// `0, step, 2*step, ...` below 60.
pub fn minute_values(step: Step) -> Vec<u32> {
    stepped(MINUTES_PER_HOUR, step)
}

/// Years from `current - 100` to `current + 100` inclusive.
///
/// # Errors
/// Returns `ParseError::YearOutOfRange` if either end leaves the `i32` range.
pub fn year_window(current: i32) -> Result<Vec<i32>, ParseError> {
    let first = current
        .checked_sub(YEAR_WINDOW_RADIUS)
        .ok_or(ParseError::YearOutOfRange(current))?;
    let last = current
        .checked_add(YEAR_WINDOW_RADIUS)
        .ok_or(ParseError::YearOutOfRange(current))?;
    Ok((first..=last).collect())
}

/// Two-character zero padding for numbers below ten.
pub fn pad(number: u32) -> String {
    format!("{number:02}")
}

/// A number as the legacy padding helper returned it: padded text below
/// ten, the bare number otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Padded {
    #[display(fmt = "{}", _0)]
    Text(String),
    #[display(fmt = "{}", _0)]
    Number(u32),
}

pub fn pad_compat(number: u32) -> Padded {
    if number < PAD_THRESHOLD {
        Padded::Text(pad(number))
    } else {
        Padded::Number(number)
    }
}
