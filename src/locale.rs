//! Static locale table: month and weekday names per supported locale.
//!
//! Adding a locale means adding a variant, its identifier in [`Locale::id`],
//! and twelve month names in calendar order (plus weekday names).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, DEFAULT_LOCALE_ID, MONTHS_IN_YEAR};
use crate::{CalendarError, prelude::*};

type MonthNames = [&'static str; MONTHS_IN_YEAR];
type WeekdayNames = [&'static str; DAYS_IN_WEEK];

const ENGLISH_MONTHS: MonthNames = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_MONTHS_SHORT: MonthNames = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SPANISH_MONTHS: MonthNames = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const SPANISH_MONTHS_SHORT: MonthNames = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

// Monday first, matching chrono's `num_days_from_monday`.
const ENGLISH_WEEKDAYS: WeekdayNames = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const ENGLISH_WEEKDAYS_SHORT: WeekdayNames = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const SPANISH_WEEKDAYS: WeekdayNames = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const SPANISH_WEEKDAYS_SHORT: WeekdayNames = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

/// A supported locale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English month names, month-first numeric dates
    #[default]
    #[display(fmt = "en")]
    English,
    /// Spanish month names, day-first numeric dates
    #[display(fmt = "es")]
    Spanish,
}

impl Locale {
    /// Every locale in the table, default first
    pub const ALL: [Self; 2] = [Self::English, Self::Spanish];

    /// Identifier used as the locale table key
    pub const fn id(self) -> &'static str {
        match self {
            Self::English => DEFAULT_LOCALE_ID,
            Self::Spanish => "es",
        }
    }

    /// Full month names in calendar order
    pub const fn month_names(self) -> &'static MonthNames {
        match self {
            Self::English => &ENGLISH_MONTHS,
            Self::Spanish => &SPANISH_MONTHS,
        }
    }

    /// Abbreviated month names in calendar order
    pub const fn short_month_names(self) -> &'static MonthNames {
        match self {
            Self::English => &ENGLISH_MONTHS_SHORT,
            Self::Spanish => &SPANISH_MONTHS_SHORT,
        }
    }

    /// Full weekday names, Monday first
    pub const fn weekday_names(self) -> &'static WeekdayNames {
        match self {
            Self::English => &ENGLISH_WEEKDAYS,
            Self::Spanish => &SPANISH_WEEKDAYS,
        }
    }

    /// Abbreviated weekday names, Monday first
    pub const fn short_weekday_names(self) -> &'static WeekdayNames {
        match self {
            Self::English => &ENGLISH_WEEKDAYS_SHORT,
            Self::Spanish => &SPANISH_WEEKDAYS_SHORT,
        }
    }

    /// Whether numeric dates put the day before the month
    pub(crate) const fn day_first(self) -> bool {
        matches!(self, Self::Spanish)
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.id() == s)
            .ok_or_else(|| CalendarError::UnknownLocale(s.to_owned()))
    }
}

impl TryFrom<String> for Locale {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.id().to_owned()
    }
}

/// Looks up the month name list for a locale identifier.
pub fn month_names_for(id: &str) -> Option<&'static MonthNames> {
    id.parse::<Locale>().ok().map(Locale::month_names)
}

/// The read-only locale table: identifier to twelve month names.
pub fn locale_table() -> impl Iterator<Item = (&'static str, &'static MonthNames)> {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale.id(), locale.month_names()))
}
