use crate::CalendarError;
use crate::consts::{DECEMBER, JANUARY, MAX_DAY, MIN_DAY};
use crate::validate::{is_valid_day, is_valid_month, is_valid_year};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=2100)
/// with exactly four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating it with [`is_valid_year`]
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is out of range.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        if !is_valid_year(value) {
            return Err(CalendarError::InvalidYear(value));
        }
        u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::InvalidYear(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `JANUARY..=DECEMBER` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating it with [`is_valid_month`]
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `DECEMBER`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        if !is_valid_month(value) {
            return Err(CalendarError::InvalidMonth(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// Returns the month value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }

    /// Zero-based position of this month in a locale's month list
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// All twelve months in calendar order
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (JANUARY..=DECEMBER).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u32> for Month {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the coarse range `MIN_DAY..=MAX_DAY` (1..=31).
///
/// The bound is independent of any month: `Day::new(31)` succeeds and, paired
/// with a 30-day month in [`resolve_date`], rolls over into the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it with [`is_valid_day`]
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        if !is_valid_day(value) {
            return Err(CalendarError::InvalidDay(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidDay(value))
    }

    /// Returns the day value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl TryFrom<u32> for Day {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Number of days in `month` of `year`.
///
/// Resolves the day before the first of the following month, which accounts
/// for leap Februaries without a lookup table.
pub fn days_in_month(year: Year, month: Month) -> Result<u32, CalendarError> {
    let (next_year, next_month) = if month.get() == DECEMBER {
        (year.get() + 1, JANUARY)
    } else {
        (year.get(), month.get() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, MIN_DAY)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::DateOutOfRange {
            year: year.get(),
            month: month.get(),
            day: MAX_DAY,
        })
}

/// Builds a concrete date, letting days past the end of the month spill into
/// the following month.
pub fn resolve_date(year: Year, month: Month, day: Day) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year.get(), month.get(), MIN_DAY)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day.get() - MIN_DAY))))
        .ok_or(CalendarError::DateOutOfRange {
            year: year.get(),
            month: month.get(),
            day: day.get(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1900).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(2100).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(1899), Err(CalendarError::InvalidYear(1899))));
        assert!(matches!(Year::new(2101), Err(CalendarError::InvalidYear(2101))));
        assert!(matches!(Year::new(0), Err(CalendarError::InvalidYear(0))));
        assert!(matches!(Year::new(-2000), Err(CalendarError::InvalidYear(-2000))));
    }

    #[test]
    fn test_year_try_from_and_into() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);
        let value: i32 = year.into();
        assert_eq!(value, 2024);

        let result: Result<Year, _> = 1800.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("3000");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(CalendarError::InvalidMonth(13))));
        assert!(matches!(Month::new(256), Err(CalendarError::InvalidMonth(256))));
    }

    #[test]
    fn test_month_index_and_all() {
        assert_eq!(Month::new(1).unwrap().index(), 0);
        assert_eq!(Month::new(12).unwrap().index(), 11);

        let months: Vec<u32> = Month::all().map(Month::get).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_month_display() {
        assert_eq!(Month::new(8).unwrap().to_string(), "8");
    }

    #[test]
    fn test_day_new_is_coarse() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(31).is_ok());
        assert!(matches!(Day::new(0), Err(CalendarError::InvalidDay(0))));
        assert!(matches!(Day::new(32), Err(CalendarError::InvalidDay(32))));
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");
        let result: Result<Day, _> = serde_json::from_str("40");
        assert!(result.is_err());
    }

    #[test]
    fn test_days_in_month_february() {
        let feb = Month::new(2).unwrap();
        let cases = [
            (2000, 29, "divisible by 400"),
            (1999, 28, "not divisible by 4"),
            (2024, 29, "divisible by 4"),
            (1900, 28, "century not divisible by 400"),
            (2100, 28, "century not divisible by 400"),
        ];
        for (year, expected, description) in cases {
            assert_eq!(
                days_in_month(Year::new(year).unwrap(), feb).unwrap(),
                expected,
                "Year {year} ({description})"
            );
        }
    }

    #[test]
    fn test_days_in_month_all_months() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let year = Year::new(2023).unwrap();
        for month in Month::all() {
            assert_eq!(
                days_in_month(year, month).unwrap(),
                expected[month.index()],
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_december_of_last_year() {
        let count = days_in_month(Year::new(2100).unwrap(), Month::new(12).unwrap()).unwrap();
        assert_eq!(count, 31);
    }

    #[test]
    fn test_resolve_date_in_range() {
        let date = resolve_date(
            Year::new(2000).unwrap(),
            Month::new(1).unwrap(),
            Day::new(15).unwrap(),
        )
        .unwrap();
        assert_eq!(date, ymd(2000, 1, 15));
    }

    #[test]
    fn test_resolve_date_rolls_over() {
        // April has 30 days
        let date = resolve_date(
            Year::new(2023).unwrap(),
            Month::new(4).unwrap(),
            Day::new(31).unwrap(),
        )
        .unwrap();
        assert_eq!(date, ymd(2023, 5, 1));

        // Non-leap February
        let date = resolve_date(
            Year::new(2023).unwrap(),
            Month::new(2).unwrap(),
            Day::new(31).unwrap(),
        )
        .unwrap();
        assert_eq!(date, ymd(2023, 3, 3));
    }
}
