use crate::ParseError;
use crate::consts::DAYS_PER_WEEK;
use crate::instant::{days_in_month, weekday_of};
use crate::types::{Month, WeekStart};

/// Shape of a month laid out in seven columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLayout {
    /// Blank cells before day 1, belonging to the previous month
    pub leading: u32,
    pub days: u32,
    /// Blank cells after the last day, belonging to the next month
    pub trailing: u32,
}

impl GridLayout {
    /// # Errors
    /// Returns `ParseError::YearOutOfRange` if the month cannot be represented.
    pub fn new(year: i32, month: Month, week_start: WeekStart) -> Result<Self, ParseError> {
        let days = days_in_month(year, month).ok_or(ParseError::YearOutOfRange(year))?;
        let first = weekday_of(year, month.into(), 1).ok_or(ParseError::YearOutOfRange(year))?;

        let week = u32::from(DAYS_PER_WEEK);
        let leading = (u32::from(first.get()) + week - u32::from(week_start.get())) % week;
        // (week_start - first - days) mod 7, kept unsigned
        let trailing = (week - (leading + days) % week) % week;

        Ok(Self {
            leading,
            days,
            trailing,
        })
    }

    /// Total number of cells, always a whole number of weeks
    pub const fn len(&self) -> usize {
        (self.leading + self.days + self.trailing) as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn rows(&self) -> usize {
        self.len() / DAYS_PER_WEEK as usize
    }

    pub fn cells(&self) -> Vec<Option<u32>> {
        let blanks = |count: u32| std::iter::repeat_n(None, count as usize);
        blanks(self.leading)
            .chain((1..=self.days).map(Some))
            .chain(blanks(self.trailing))
            .collect()
    }
}

/// Day numbers of a month padded with `None` so the first column falls on
/// `week_start`.
///
/// # Errors
/// Returns `ParseError::YearOutOfRange` if the month cannot be represented.
pub fn month_grid(
    year: i32,
    month: Month,
    week_start: WeekStart,
) -> Result<Vec<Option<u32>>, ParseError> {
    GridLayout::new(year, month, week_start).map(|layout| layout.cells())
}
