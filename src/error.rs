use crate::consts::{MAX_DAY, MAX_YEAR, MIN_DAY, MIN_YEAR};

/// Errors raised by validation, formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year is outside `MIN_YEAR..=MAX_YEAR` or not exactly four digits.
    #[error("Invalid year: {0} (must be {MIN_YEAR}-{MAX_YEAR})")]
    InvalidYear(i32),

    /// Month is outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// Day is outside the coarse `1..=31` bound.
    #[error("Invalid day: {0} (must be {MIN_DAY}-{MAX_DAY})")]
    InvalidDay(u32),

    /// Locale identifier has no entry in the locale table.
    #[error("Locale not found: {0}")]
    UnknownLocale(String),

    /// The date could not be represented, even after day roll-over.
    #[error("Date out of range: {year}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    /// Input text does not match the expected date layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Parsing needs a numeric year, a month and a day, but the options omit
    /// one or only keep two year digits.
    #[error("Format options must include a numeric year, month and day to parse a date")]
    IncompletePattern,
}
