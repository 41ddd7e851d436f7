//! Locale-aware rendering and parsing of single dates.
//!
//! A [`FormatOptions`] value and a [`Locale`] expand into a token pattern.
//! The same pattern drives both [`render_date`] and [`parse_date`], so every
//! rendered string with a year, month and day parses back to its date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::DATE_SEPARATOR;
use crate::types::{Day, Month, Year};
use crate::{CalendarError, Locale, prelude::*};

/// How a numeric component (year or day) is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum NumericStyle {
    /// No padding: `5`, `2000`
    #[display(fmt = "numeric")]
    #[serde(rename = "numeric")]
    Numeric,
    /// Zero-padded to two digits; years keep only the last two: `05`, `00`
    #[display(fmt = "2-digit")]
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// How the month is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MonthStyle {
    #[display(fmt = "numeric")]
    #[serde(rename = "numeric")]
    Numeric,
    #[display(fmt = "2-digit")]
    #[serde(rename = "2-digit")]
    TwoDigit,
    /// Full locale name: `January`, `enero`
    #[display(fmt = "long")]
    #[serde(rename = "long")]
    Long,
    /// Abbreviated locale name: `Jan`, `ene`
    #[display(fmt = "short")]
    #[serde(rename = "short")]
    Short,
}

impl MonthStyle {
    const fn is_textual(self) -> bool {
        matches!(self, Self::Long | Self::Short)
    }
}

/// How the weekday is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TextStyle {
    #[display(fmt = "long")]
    #[serde(rename = "long")]
    Long,
    #[display(fmt = "short")]
    #[serde(rename = "short")]
    Short,
}

/// Which date components to render, and how. `None` omits the component.
///
/// The default is a numeric year with two-digit month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub weekday: Option<TextStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            weekday: None,
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::TwoDigit),
            day: Some(NumericStyle::TwoDigit),
        }
    }
}

impl FormatOptions {
    /// Long month name with unpadded day and full year: `January 5, 2000`
    pub const fn long() -> Self {
        Self {
            weekday: None,
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Long),
            day: Some(NumericStyle::Numeric),
        }
    }

    /// Same as `self` with the weekday set
    #[must_use]
    pub const fn with_weekday(mut self, style: TextStyle) -> Self {
        self.weekday = Some(style);
        self
    }

    const fn is_parseable(&self) -> bool {
        matches!(self.year, Some(NumericStyle::Numeric))
            && self.month.is_some()
            && self.day.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Weekday(TextStyle),
    Year(NumericStyle),
    Month(MonthStyle),
    Day(NumericStyle),
    Literal(&'static str),
}

fn pattern(locale: Locale, options: &FormatOptions) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(8);

    let date_part = match options.month {
        Some(month) if month.is_textual() => textual_pattern(locale, month, options),
        _ => numeric_pattern(locale, options),
    };

    if let Some(weekday) = options.weekday {
        tokens.push(Token::Weekday(weekday));
        if !date_part.is_empty() {
            tokens.push(Token::Literal(", "));
        }
    }
    tokens.extend(date_part);
    tokens
}

fn numeric_pattern(locale: Locale, options: &FormatOptions) -> Vec<Token> {
    let month = options.month.map(Token::Month);
    let day = options.day.map(Token::Day);
    let year = options.year.map(Token::Year);
    let order = if locale.day_first() {
        [day, month, year]
    } else {
        [month, day, year]
    };

    let mut tokens = Vec::with_capacity(5);
    for token in order.into_iter().flatten() {
        if !tokens.is_empty() {
            tokens.push(Token::Literal(DATE_SEPARATOR));
        }
        tokens.push(token);
    }
    tokens
}

fn textual_pattern(locale: Locale, month: MonthStyle, options: &FormatOptions) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(5);
    match locale {
        Locale::English => {
            tokens.push(Token::Month(month));
            if let Some(day) = options.day {
                tokens.extend([Token::Literal(" "), Token::Day(day)]);
            }
            if let Some(year) = options.year {
                let gap = if options.day.is_some() { ", " } else { " " };
                tokens.extend([Token::Literal(gap), Token::Year(year)]);
            }
        }
        Locale::Spanish => {
            let gap = if month == MonthStyle::Long { " de " } else { " " };
            if let Some(day) = options.day {
                tokens.extend([Token::Day(day), Token::Literal(gap)]);
            }
            tokens.push(Token::Month(month));
            if let Some(year) = options.year {
                tokens.extend([Token::Literal(gap), Token::Year(year)]);
            }
        }
    }
    tokens
}

/// Renders `date` according to `locale` and `options`.
pub fn render_date(date: NaiveDate, locale: Locale, options: &FormatOptions) -> String {
    let mut out = String::new();
    for token in pattern(locale, options) {
        match token {
            Token::Weekday(style) => {
                let names = match style {
                    TextStyle::Long => locale.weekday_names(),
                    TextStyle::Short => locale.short_weekday_names(),
                };
                out.push_str(names[date.weekday().num_days_from_monday() as usize]);
            }
            Token::Year(style) => {
                let spec = match style {
                    NumericStyle::Numeric => "%Y",
                    NumericStyle::TwoDigit => "%y",
                };
                out.push_str(&date.format(spec).to_string());
            }
            Token::Month(style) => match style {
                MonthStyle::Numeric => out.push_str(&date.format("%-m").to_string()),
                MonthStyle::TwoDigit => out.push_str(&date.format("%m").to_string()),
                MonthStyle::Long => out.push_str(locale.month_names()[date.month0() as usize]),
                MonthStyle::Short => {
                    out.push_str(locale.short_month_names()[date.month0() as usize]);
                }
            },
            Token::Day(style) => {
                let spec = match style {
                    NumericStyle::Numeric => "%-d",
                    NumericStyle::TwoDigit => "%d",
                };
                out.push_str(&date.format(spec).to_string());
            }
            Token::Literal(text) => out.push_str(text),
        }
    }
    out
}

/// Parses text produced by [`render_date`] with the same `locale` and `options`.
///
/// The parsed date must exist as written; no day roll-over is applied.
///
/// # Errors
/// - `CalendarError::IncompletePattern` if `options` omit the year, month or day,
///   or ask for a two-digit year
/// - `CalendarError::InvalidFormat` if `input` does not match the pattern, names a
///   nonexistent date, or carries a weekday that disagrees with the date
/// - `CalendarError::InvalidYear` and friends if a component is out of range
pub fn parse_date(
    input: &str,
    locale: Locale,
    options: &FormatOptions,
) -> Result<NaiveDate, CalendarError> {
    if !options.is_parseable() {
        return Err(CalendarError::IncompletePattern);
    }

    let invalid = || CalendarError::InvalidFormat(input.to_owned());
    let mut rest = input.trim();
    let mut weekday = None;
    let (mut year, mut month, mut day) = (None, None, None);

    for token in pattern(locale, options) {
        match token {
            Token::Weekday(style) => {
                let names = match style {
                    TextStyle::Long => locale.weekday_names(),
                    TextStyle::Short => locale.short_weekday_names(),
                };
                let (index, tail) = take_name(rest, names).ok_or_else(invalid)?;
                weekday = Some(index);
                rest = tail;
            }
            Token::Year(style) => {
                let (value, tail) = take_number(rest, style).ok_or_else(invalid)?;
                year = Some(i32::try_from(value).map_err(|_| invalid())?);
                rest = tail;
            }
            Token::Month(style) => {
                let (value, tail) = match style {
                    MonthStyle::Numeric => take_number(rest, NumericStyle::Numeric),
                    MonthStyle::TwoDigit => take_number(rest, NumericStyle::TwoDigit),
                    MonthStyle::Long => take_name(rest, locale.month_names())
                        .map(|(index, tail)| (index as u32 + 1, tail)),
                    MonthStyle::Short => take_name(rest, locale.short_month_names())
                        .map(|(index, tail)| (index as u32 + 1, tail)),
                }
                .ok_or_else(invalid)?;
                month = Some(value);
                rest = tail;
            }
            Token::Day(style) => {
                let (value, tail) = take_number(rest, style).ok_or_else(invalid)?;
                day = Some(value);
                rest = tail;
            }
            Token::Literal(text) => {
                rest = rest.strip_prefix(text).ok_or_else(invalid)?;
            }
        }
    }

    if !rest.is_empty() {
        return Err(invalid());
    }

    let (Some(year), Some(month), Some(day)) = (year, month, day) else {
        return Err(CalendarError::IncompletePattern);
    };
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    let day = Day::new(day)?;
    let date =
        NaiveDate::from_ymd_opt(year.get(), month.get(), day.get()).ok_or_else(invalid)?;

    match weekday {
        Some(index) if index != date.weekday().num_days_from_monday() as usize => Err(invalid()),
        _ => Ok(date),
    }
}

fn take_number(input: &str, style: NumericStyle) -> Option<(u32, &str)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let valid = match style {
        NumericStyle::Numeric => (1..=4).contains(&digits),
        NumericStyle::TwoDigit => digits == 2,
    };
    if !valid {
        return None;
    }
    let (number, tail) = input.split_at(digits);
    number.parse().ok().map(|value| (value, tail))
}

/// Matches the longest name in `names` at the start of `input`.
fn take_name<'a>(input: &'a str, names: &[&str]) -> Option<(usize, &'a str)> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| input.starts_with(**name))
        .max_by_key(|(_, name)| name.len())
        .map(|(index, name)| (index, &input[name.len()..]))
}
