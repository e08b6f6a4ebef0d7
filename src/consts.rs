/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Number of days in a week, also the column count of a month grid
pub const DAYS_PER_WEEK: u8 = 7;

/// Hours enumerated by the clock grid
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes enumerated by the clock grid
pub const MINUTES_PER_HOUR: u32 = 60;

/// Last selectable hour of a day
pub const MAX_HOUR: u8 = 23;

/// Last selectable minute of an hour
pub const MAX_MINUTE: u8 = 59;

/// Years listed on each side of the reference year by the year picker
pub const YEAR_WINDOW_RADIUS: i32 = 100;

/// Total length of the year window (radius on both sides plus the reference year)
pub const YEAR_WINDOW_LEN: usize = 2 * YEAR_WINDOW_RADIUS as usize + 1;

/// Monday in ISO weekday numbering
pub const MONDAY: u8 = 1;
/// Sunday in ISO weekday numbering
pub const SUNDAY: u8 = 7;

/// Week start used when no locale provider is installed
pub const DEFAULT_WEEK_START: u8 = MONDAY;

/// Numbers below this are zero-padded to two characters
pub const PAD_THRESHOLD: u32 = 10;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the start and end of a disabled time range
pub const TIME_RANGE_SEPARATOR: char = '-';
/// Separator between hours and minutes
pub const TIME_SEPARATOR: char = ':';

/// Marker handed to the stage controller after the last stage
pub const FLOW_TERMINAL: &str = "end";
