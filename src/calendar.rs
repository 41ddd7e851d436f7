//! Calendar operations and the year view they build.
//!
//! [`Calendar`] binds every operation to a [`CalendarConfig`]. The year view
//! reports an invalid year as a [`CalendarYearResult::Error`] value; every
//! other operation fails with a [`CalendarError`].

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::format::{parse_date, render_date};
use crate::types::{Day, Month, Year, days_in_month, resolve_date};
use crate::{CalendarConfig, CalendarError, FormatOptions, Locale, prelude::*};

/// Day count and formatted dates for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// Number of days in the month; always equals `collection.len()`
    pub count: u32,
    /// One formatted date per day, in ascending day order
    pub collection: Vec<String>,
}

/// All twelve months of a year keyed by lowercase month name, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarYear(IndexMap<String, MonthEntry>);

impl CalendarYear {
    /// Entry for a lowercase month name
    pub fn month(&self, name: &str) -> Option<&MonthEntry> {
        self.0.get(name)
    }

    /// Sum of day counts across all months
    pub fn total_days(&self) -> u32 {
        self.0.values().map(|entry| entry.count).sum()
    }

    /// Unwraps the ordered month map
    pub fn into_inner(self) -> IndexMap<String, MonthEntry> {
        self.0
    }
}

/// Message carried by a rejected year request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description naming the rejected value
    pub body: String,
}

/// Outcome of a year request: either the calendar or an error value.
///
/// Serializes as the month map itself or as `{"error": {"body": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarYearResult {
    /// The year was rejected
    Error { error: ErrorBody },
    /// The month map for a valid year
    Calendar(CalendarYear),
}

impl CalendarYearResult {
    fn rejected(err: &CalendarError) -> Self {
        Self::Error {
            error: ErrorBody {
                body: err.to_string(),
            },
        }
    }

    /// Whether this is an error value
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The error message, if this is an error value
    pub fn error_body(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(&error.body),
            Self::Calendar(_) => None,
        }
    }

    /// The calendar, if this is not an error value
    pub const fn calendar(&self) -> Option<&CalendarYear> {
        match self {
            Self::Calendar(calendar) => Some(calendar),
            Self::Error { .. } => None,
        }
    }

    /// Converts into a `Result` carrying the error message on failure
    ///
    /// # Errors
    /// Returns the error body if this is an error value.
    pub fn into_result(self) -> Result<CalendarYear, String> {
        match self {
            Self::Calendar(calendar) => Ok(calendar),
            Self::Error { error } => Err(error.body),
        }
    }
}

/// Calendar operations bound to a [`CalendarConfig`].
///
/// The config stands in for ambient host locale settings: any operation called
/// without a locale or options uses the config's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calendar {
    config: CalendarConfig,
}

impl Calendar {
    /// Creates a calendar using `config` for omitted locales and options
    pub const fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// The defaults this calendar applies
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    /// Returns `InvalidYear` or `InvalidMonth` if either argument is out of range.
    pub fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        days_in_month(Year::new(year)?, Month::new(month)?)
    }

    /// Formats a single date.
    ///
    /// Arguments are checked in the order month, year, day, locale. A day past
    /// the end of the month rolls over into the next month.
    ///
    /// # Errors
    /// Returns the error for the first invalid argument.
    pub fn format_date(
        &self,
        month: u32,
        day: u32,
        year: i32,
        locale: Option<&str>,
        options: Option<&FormatOptions>,
    ) -> Result<String, CalendarError> {
        let month = Month::new(month)?;
        let year = Year::new(year)?;
        let day = Day::new(day)?;
        let locale = self.resolve_locale(locale)?;
        let options = options.unwrap_or(&self.config.options);

        let date = resolve_date(year, month, day)?;
        Ok(render_date(date, locale, options))
    }

    /// Formatted dates for every day of `month` in `year`, in day order.
    ///
    /// # Errors
    /// Returns `InvalidYear` or `InvalidMonth` if either argument is out of range.
    pub fn list_days_in_month(&self, year: i32, month: u32) -> Result<Vec<String>, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        self.month_entry(year, month).map(|entry| entry.collection)
    }

    fn month_entry(&self, year: Year, month: Month) -> Result<MonthEntry, CalendarError> {
        let count = days_in_month(year, month)?;
        tracing::trace!(year = year.get(), month = month.get(), count, "listing days");
        let collection = (1..=count)
            .map(|day| {
                let date = resolve_date(year, month, Day::new(day)?)?;
                Ok(render_date(date, self.config.locale, &self.config.options))
            })
            .collect::<Result<Vec<_>, CalendarError>>()?;
        Ok(MonthEntry { count, collection })
    }

    /// Builds the month map for `year`, naming months in `locale`.
    ///
    /// An invalid year produces [`CalendarYearResult::Error`] rather than failing.
    pub fn calendar_year(&self, year: i32, locale: Locale) -> CalendarYearResult {
        match Year::new(year) {
            Ok(year) => self.build_year(year, locale),
            Err(err) => Self::reject_year(year, &err),
        }
    }

    fn reject_year(year: i32, err: &CalendarError) -> CalendarYearResult {
        tracing::warn!(year, error = %err, "rejecting calendar year request");
        CalendarYearResult::rejected(err)
    }

    fn build_year(&self, year: Year, locale: Locale) -> CalendarYearResult {
        tracing::debug!(year = year.get(), locale = %locale, "building calendar year");

        let names = locale.month_names();
        let mut months = IndexMap::with_capacity(names.len());
        for month in Month::all() {
            let entry = match self.month_entry(year, month) {
                Ok(entry) => entry,
                Err(err) => return CalendarYearResult::rejected(&err),
            };
            months.insert(names[month.index()].to_lowercase(), entry);
        }
        CalendarYearResult::Calendar(CalendarYear(months))
    }

    /// Same as [`Self::calendar_year`], taking a locale identifier.
    ///
    /// The year is checked first: an invalid year is reported through the
    /// returned value whatever the locale.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownLocale` if the year is valid and `locale`
    /// is not in the locale table.
    pub fn get_calendar_year(
        &self,
        year: i32,
        locale: Option<&str>,
    ) -> Result<CalendarYearResult, CalendarError> {
        let year = match Year::new(year) {
            Ok(year) => year,
            Err(err) => return Ok(Self::reject_year(year, &err)),
        };
        let locale = self.resolve_locale(locale)?;
        Ok(self.build_year(year, locale))
    }

    /// Parses a string produced by [`Self::format_date`] back into a date.
    ///
    /// # Errors
    /// See [`crate::parse_date`]; also fails on an unknown locale.
    pub fn parse_date(
        &self,
        input: &str,
        locale: Option<&str>,
        options: Option<&FormatOptions>,
    ) -> Result<NaiveDate, CalendarError> {
        let locale = self.resolve_locale(locale)?;
        parse_date(input, locale, options.unwrap_or(&self.config.options))
    }

    fn resolve_locale(&self, locale: Option<&str>) -> Result<Locale, CalendarError> {
        locale.map_or(Ok(self.config.locale), |id| id.parse())
    }
}
