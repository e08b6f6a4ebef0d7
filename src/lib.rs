//! Calendar grids, clock steps and disablement rules for date/time pickers.
//!
//! The crate answers two kinds of questions for a picker widget: what to
//! list (weekday headers, month names, day cells, hour and minute steps,
//! years) and whether a listed unit may be selected given the configured
//! bounds, disabled dates, weekdays and time ranges. Everything is a pure
//! function of its arguments; rendering and event handling stay with the
//! host.

mod consts;
mod prelude;

pub mod config;
pub mod flow;
pub mod grid;
pub mod instant;
pub mod labels;
pub mod rules;
pub mod time_range;
pub mod types;
pub mod week_start;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, Constraints, PickerConfig};
pub use consts::*;
pub use flow::{FlowPlan, PickerType, Stage, StageController, build_flow, build_flow_from_stages};
pub use grid::{GridLayout, month_grid};
pub use instant::{parse_iso, start_of_day};
pub use labels::{
    CalendarNames, EnglishNames, Padded, capitalize, hour_values, minute_values, month_labels,
    pad, pad_compat, weekday_labels, year_window,
};
pub use rules::{
    DisabledDate, DisabledDateError, component_is_disabled, day_is_disabled, hour_is_disabled,
    minute_is_disabled, month_is_disabled, year_is_disabled,
};
pub use time_range::{TimeOfDay, TimeRange, TimeRangeError};
pub use types::{IsoWeekday, Month, Step, WeekStart};
pub use week_start::{FixedWeekStart, WeekStartProvider, resolve_week_start};

use crate::prelude::*;

/// Rejected calendar or clock component.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", _0, MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid weekday: {} (must be {}-{})", _0, MONDAY, SUNDAY)]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid week start: {} (must be 0-{})", _0, SUNDAY)]
    InvalidWeekStart(u8),
    #[display(fmt = "Invalid step: {} (must be positive)", _0)]
    InvalidStep(u32),
    #[display(fmt = "Year {} is outside the supported calendar range", _0)]
    YearOutOfRange(i32),
}

impl std::error::Error for ParseError {}
