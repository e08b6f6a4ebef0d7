//! Picker configuration as handed over by the host component.
//!
//! Keys follow the component's camelCase names. Disabled dates, weekdays,
//! time ranges and steps are validated while deserializing, so a loaded
//! [`PickerConfig`] never re-parses strings on a predicate call.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::flow::{PickerType, StageController, build_flow};
use crate::grid::month_grid;
use crate::labels::{hour_values, minute_values, weekday_labels, year_window};
use crate::rules::{self, DisabledDate, DisabledDateError};
use crate::time_range::{TimeRange, TimeRangeError};
use crate::types::{IsoWeekday, Month, Step, WeekStart};
use crate::week_start::{WeekStartProvider, resolve_week_start};
use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),

    #[error(transparent)]
    DisabledDate(#[from] DisabledDateError),

    #[error(transparent)]
    Component(#[from] ParseError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// Earliest selectable instant; unparseable text means no bound
    #[serde(with = "iso_bound")]
    pub min_date: Option<DateTime<FixedOffset>>,
    #[serde(with = "iso_bound")]
    pub max_date: Option<DateTime<FixedOffset>>,
    pub disabled_dates: Vec<DisabledDate>,
    pub disabled_days: Vec<IsoWeekday>,
    /// Ranges consulted by both hour and minute checks
    pub disabled_times: Vec<TimeRange>,
    pub disabled_hours: Vec<TimeRange>,
    pub disabled_minutes: Vec<TimeRange>,
    /// Explicit week start; when absent the locale provider decides
    pub week_start: Option<WeekStart>,
    pub locale: Option<String>,
    pub hour_step: Step,
    pub minute_step: Step,
    #[serde(rename = "type")]
    pub picker_type: PickerType,
}

impl PickerConfig {
    /// Replaces the disabled dates with parsed `YYYY-MM-DD` / `MM-DD` entries.
    ///
    /// # Errors
    /// Returns `ConfigError::DisabledDate` for the first malformed entry.
    pub fn with_disabled_dates<I, S>(mut self, dates: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disabled_dates = parse_all(dates)?;
        Ok(self)
    }

    /// Replaces the disabled time ranges with parsed `H:MM-H:MM` entries.
    ///
    /// # Errors
    /// Returns `ConfigError::TimeRange` for the first malformed entry.
    pub fn with_disabled_times<I, S>(mut self, ranges: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disabled_times = parse_all(ranges)?;
        Ok(self)
    }

    /// Binds the configuration to the disablement rules.
    ///
    /// A `min_date` after `max_date` is kept as given; every date-level check
    /// then reports disabled.
    pub fn constraints(self, week_starts: Option<&dyn WeekStartProvider>) -> Constraints {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                tracing::warn!(%min, %max, "minDate is after maxDate, no date is selectable");
            }
        }

        let week_start = self.week_start.unwrap_or_else(|| {
            resolve_week_start(week_starts, self.locale.as_deref().unwrap_or_default())
        });

        tracing::debug!(
            picker_type = %self.picker_type,
            week_start = %week_start,
            disabled_dates = self.disabled_dates.len(),
            disabled_days = self.disabled_days.len(),
            disabled_ranges =
                self.disabled_times.len() + self.disabled_hours.len() + self.disabled_minutes.len(),
            "picker constraints ready"
        );

        Constraints {
            config: self,
            week_start,
        }
    }
}

fn parse_all<T, I, S>(items: I) -> Result<Vec<T>, ConfigError>
where
    T: std::str::FromStr,
    ConfigError: From<T::Err>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().parse::<T>().map_err(ConfigError::from))
        .collect()
}

/// A validated configuration with its week start resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    config:     PickerConfig,
    week_start: WeekStart,
}

impl Constraints {
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn day_is_disabled(&self, year: i32, month: u32, day: u32) -> bool {
        rules::day_is_disabled(
            &self.config.disabled_dates,
            &self.config.disabled_days,
            self.config.min_date.as_ref(),
            self.config.max_date.as_ref(),
            year,
            month,
            day,
        )
    }

    pub fn month_is_disabled(&self, year: i32, month: Month) -> bool {
        rules::month_is_disabled(
            self.config.min_date.as_ref(),
            self.config.max_date.as_ref(),
            year,
            month,
        )
    }

    pub fn year_is_disabled(&self, year: i32) -> bool {
        rules::year_is_disabled(
            self.config.min_date.as_ref(),
            self.config.max_date.as_ref(),
            year,
        )
    }

    /// Hour check against `disabledHours` and `disabledTimes`.
    pub fn hour_is_disabled(
        &self,
        min: Option<u32>,
        max: Option<u32>,
        hour: u32,
        current_minute: u32,
    ) -> bool {
        let ranges = self
            .config
            .disabled_hours
            .iter()
            .chain(&self.config.disabled_times);
        rules::hour_is_disabled(min, max, hour, current_minute, ranges)
    }

    /// Minute check against `disabledMinutes` and `disabledTimes`.
    pub fn minute_is_disabled(
        &self,
        min: Option<u32>,
        max: Option<u32>,
        minute: u32,
        current_hour: u32,
    ) -> bool {
        let ranges = self
            .config
            .disabled_minutes
            .iter()
            .chain(&self.config.disabled_times);
        rules::minute_is_disabled(min, max, minute, current_hour, ranges)
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        weekday_labels(self.week_start)
    }

    /// # Errors
    /// Returns `ParseError::YearOutOfRange` if the month cannot be represented.
    pub fn month_grid(&self, year: i32, month: Month) -> Result<Vec<Option<u32>>, ParseError> {
        month_grid(year, month, self.week_start)
    }

    pub fn hour_values(&self) -> Vec<u32> {
        hour_values(self.config.hour_step)
    }

    pub fn minute_values(&self) -> Vec<u32> {
        minute_values(self.config.minute_step)
    }

    /// Year window around `current` with out-of-bounds years removed.
    ///
    /// # Errors
    /// Returns `ParseError::YearOutOfRange` when the window leaves the `i32` range.
    pub fn selectable_years(&self, current: i32) -> Result<Vec<i32>, ParseError> {
        Ok(year_window(current)?
            .into_iter()
            .filter(|&year| !self.year_is_disabled(year))
            .collect())
    }

    pub fn flow<C: StageController>(&self) -> C {
        build_flow(self.config.picker_type)
    }
}

mod iso_bound {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::instant::parse_iso_keep_offset;

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(bound: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bound {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().and_then(|text| {
            let parsed = parse_iso_keep_offset(text);
            if parsed.is_none() {
                tracing::warn!(input = text, "ignoring date bound that is not ISO 8601");
            }
            parsed
        }))
    }
}
