//! Injected locale and format defaults.

use serde::{Deserialize, Serialize};

use crate::consts::LOCALE_ENV_VAR;
use crate::{CalendarError, FormatOptions, Locale};

/// Defaults applied when an operation is called without a locale or options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Locale used to format dates and, for the year view, name months
    pub locale: Locale,
    /// Options used to format dates
    pub options: FormatOptions,
}

impl CalendarConfig {
    /// Creates a config with the given locale and the default format options.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CALENDAR_LOCALE`: locale identifier, `en` or `es` (default: `en`)
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownLocale` if the variable names no known locale.
    pub fn from_env() -> Result<Self, CalendarError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownLocale` if the locale variable names no known locale.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CalendarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match lookup(LOCALE_ENV_VAR) {
            Some(id) => id.trim().parse()?,
            None => Locale::default(),
        };
        Ok(Self::with_locale(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthStyle;

    #[test]
    fn test_default_config() {
        let config = CalendarConfig::default();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.options, FormatOptions::default());
    }

    #[test]
    fn test_from_lookup_unset() {
        let config = CalendarConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_from_lookup_spanish() {
        let config = CalendarConfig::from_lookup(|key| {
            (key == LOCALE_ENV_VAR).then(|| " es ".to_string())
        })
        .unwrap();
        assert_eq!(config.locale, Locale::Spanish);
    }

    #[test]
    fn test_from_lookup_unknown_locale() {
        let result = CalendarConfig::from_lookup(|_| Some("xx".to_string()));
        assert!(matches!(result, Err(CalendarError::UnknownLocale(ref id)) if id == "xx"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CalendarConfig = serde_json::from_str(r#"{"locale":"es"}"#).unwrap();
        assert_eq!(config.locale, Locale::Spanish);
        assert_eq!(config.options, FormatOptions::default());

        let config: CalendarConfig =
            serde_json::from_str(r#"{"options":{"month":"short"}}"#).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.options.month, Some(MonthStyle::Short));
    }
}
