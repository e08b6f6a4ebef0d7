use crate::ParseError;
use crate::consts::{DAYS_PER_WEEK, DEFAULT_WEEK_START, MONTHS_PER_YEAR, SUNDAY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU32, NonZeroU8};

/// A month value guaranteed to be in the range `1..=12`
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= 12
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MONTHS_PER_YEAR {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Every month of the year, January first
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MONTHS_PER_YEAR).filter_map(|m| Self::new(m).ok())
    }

    pub fn to_chrono(self) -> chrono::Month {
        // `get` is always 1..=12, so the fallback is unreachable
        chrono::Month::try_from(self.get()).unwrap_or(chrono::Month::January)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        Self::from(month.get())
    }
}

/// A weekday in ISO numbering, 1 = Monday through 7 = Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct IsoWeekday(NonZeroU8);

impl IsoWeekday {
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the value is outside `1..=7`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidWeekday(value))?;
        if value > DAYS_PER_WEEK {
            return Err(ParseError::InvalidWeekday(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        // number_from_monday is 1..=7
        let n = NonZeroU8::new(weekday.number_from_monday() as u8).unwrap_or(NonZeroU8::MIN);
        Self(n)
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        chrono::Weekday::try_from(self.get() - 1).unwrap_or(chrono::Weekday::Mon)
    }
}

impl TryFrom<u8> for IsoWeekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IsoWeekday> for u8 {
    fn from(weekday: IsoWeekday) -> Self {
        weekday.get()
    }
}

/// The weekday shown in the first column of a month grid.
///
/// Accepts `0..=7`; 0 is read as Sunday, matching locale tables that count
/// Sunday as day zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(IsoWeekday);

impl WeekStart {
    pub const MONDAY: Self = Self(IsoWeekday(NonZeroU8::MIN));

    /// # Errors
    /// Returns `ParseError::InvalidWeekStart` if the value is greater than 7.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let normalized = if value == 0 { SUNDAY } else { value };
        IsoWeekday::new(normalized)
            .map(Self)
            .map_err(|_| ParseError::InvalidWeekStart(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub const fn weekday(self) -> IsoWeekday {
        self.0
    }

    /// Zero-based rotation applied to a Monday-first list
    #[inline]
    pub const fn offset(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::new(DEFAULT_WEEK_START).unwrap_or(Self::MONDAY)
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        week_start.get()
    }
}

/// Increment between consecutive enumerated hours or minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u32", into = "u32")]
pub struct Step(NonZeroU32);

impl Step {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// # Errors
    /// Returns `ParseError::InvalidStep` if the value is 0.
    pub fn new(value: u32) -> Result<Self, ParseError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidStep(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Step {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Step> for u32 {
    fn from(step: Step) -> Self {
        step.get()
    }
}
