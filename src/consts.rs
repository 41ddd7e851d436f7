/// Earliest supported year (inclusive)
pub const MIN_YEAR: i32 = 1900;
/// Latest supported year (inclusive)
pub const MAX_YEAR: i32 = 2100;
/// Number of base-10 digits a valid year must have
pub const YEAR_DIGITS: usize = 4;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;
/// Number of months in a year, and the length of every month name list
pub const MONTHS_IN_YEAR: usize = 12;

/// Number of days in a week, and the length of every weekday name list
pub const DAYS_IN_WEEK: usize = 7;

/// First day of month
pub const MIN_DAY: u32 = 1;
/// Coarse upper bound for a day of month, independent of the month's length
pub const MAX_DAY: u32 = 31;

/// Separator between numeric date components
pub const DATE_SEPARATOR: &str = "/";

/// Locale identifier used when none is given
pub const DEFAULT_LOCALE_ID: &str = "en";

/// Environment variable read by `CalendarConfig::from_env`
pub const LOCALE_ENV_VAR: &str = "CALENDAR_LOCALE";

