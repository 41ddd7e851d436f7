//! Per-month day listings for a Gregorian calendar year.
//!
//! [`get_calendar_year`] maps each lowercase month name (English or Spanish) to
//! its day count and one formatted date per day. The lower-level operations it
//! is built from are exported alongside it.
//!
//! Every function except the year entry point reports bad input as a
//! [`CalendarError`]. The entry point reports an invalid year as a
//! [`CalendarYearResult::Error`] value instead.

mod calendar;
mod config;
mod consts;
mod error;
mod format;
mod locale;
mod prelude;
mod types;
mod validate;

pub use calendar::{Calendar, CalendarYear, CalendarYearResult, ErrorBody, MonthEntry};
pub use config::CalendarConfig;
pub use consts::*;
pub use error::CalendarError;
pub use format::{FormatOptions, MonthStyle, NumericStyle, TextStyle, parse_date, render_date};
pub use locale::{Locale, locale_table, month_names_for};
pub use types::{Day, Month, Year};
pub use validate::{is_valid_day, is_valid_month, is_valid_year};

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `InvalidYear` or `InvalidMonth` if either argument is out of range.
pub fn get_days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    Calendar::default().days_in_month(year, month)
}

/// Formats one date, defaulting to English and `MM/DD/YYYY`.
///
/// A day past the end of the month rolls over: April 31 renders as May 1.
///
/// # Errors
/// Returns the error for the first invalid argument, checked in the order
/// month, year, day, locale.
pub fn format_date(
    month: u32,
    day: u32,
    year: i32,
    locale: Option<&str>,
    options: Option<&FormatOptions>,
) -> Result<String, CalendarError> {
    Calendar::default().format_date(month, day, year, locale, options)
}

/// Formatted dates for every day of `month` in `year`.
///
/// # Errors
/// Returns `InvalidYear` or `InvalidMonth` if either argument is out of range.
pub fn list_days_in_month(year: i32, month: u32) -> Result<Vec<String>, CalendarError> {
    Calendar::default().list_days_in_month(year, month)
}

/// Builds the calendar for `year` with months named in `locale` (default `en`).
///
/// # Errors
/// Returns `CalendarError::UnknownLocale` for a locale outside the locale table.
/// An invalid year is not an `Err`: it comes back as
/// [`CalendarYearResult::Error`], and is checked before the locale.
pub fn get_calendar_year(
    year: i32,
    locale: Option<&str>,
) -> Result<CalendarYearResult, CalendarError> {
    Calendar::default().get_calendar_year(year, locale)
}
