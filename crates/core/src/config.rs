//! Core runtime configuration.
//!
//! Configuration is resolved once by the embedding application and then passed into
//! [`crate::NarrativeService`]. The library never reads process-wide environment variables;
//! callers that source the locale from their own settings hand the raw value to
//! [`locale_from_value`].

use crate::constants::DEFAULT_LOCALE;
use crate::locale::Locale;
use crate::StoryResult;

/// Core configuration resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    locale: Locale,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Create a `CoreConfig` from an optional locale value.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownLocale` if the value names an unsupported language.
    pub fn from_locale_value(value: Option<String>) -> StoryResult<Self> {
        locale_from_value(value).map(Self::new)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

/// Parse the narrative locale from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_LOCALE`].
pub fn locale_from_value(value: Option<String>) -> StoryResult<Locale> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<Locale>()).transpose()?;

    Ok(parsed.unwrap_or(DEFAULT_LOCALE))
}
