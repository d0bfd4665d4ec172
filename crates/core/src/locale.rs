//! Locale-specific vocabulary for the narrative template.
//!
//! A [`Vocabulary`] bundles the three marker phrases, the required-field labels and the
//! warning copy for one language. Operations never hardcode phrases; they look them up
//! through [`Locale::vocabulary`].

use crate::constants::*;
use crate::{StoryError, StoryResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported narrative languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French: "En tant que ..., je veux ... afin de ..."
    Fr,
    /// English: "As a ..., I want ... in order to ..."
    En,
}

/// Phrases and labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub role_marker: &'static str,
    pub action_marker: &'static str,
    pub benefit_marker: &'static str,
    pub title_label: &'static str,
    pub description_label: &'static str,
    pub product_label: &'static str,
    pub priority_label: &'static str,
    pub warning_title: &'static str,
    pub warning_description: &'static str,
}

const FRENCH: Vocabulary = Vocabulary {
    role_marker: FR_ROLE_MARKER,
    action_marker: FR_ACTION_MARKER,
    benefit_marker: FR_BENEFIT_MARKER,
    title_label: FR_TITLE_LABEL,
    description_label: FR_DESCRIPTION_LABEL,
    product_label: FR_PRODUCT_LABEL,
    priority_label: FR_PRIORITY_LABEL,
    warning_title: FR_WARNING_TITLE,
    warning_description: FR_WARNING_DESCRIPTION,
};

const ENGLISH: Vocabulary = Vocabulary {
    role_marker: EN_ROLE_MARKER,
    action_marker: EN_ACTION_MARKER,
    benefit_marker: EN_BENEFIT_MARKER,
    title_label: EN_TITLE_LABEL,
    description_label: EN_DESCRIPTION_LABEL,
    product_label: EN_PRODUCT_LABEL,
    priority_label: EN_PRIORITY_LABEL,
    warning_title: EN_WARNING_TITLE,
    warning_description: EN_WARNING_DESCRIPTION,
};

impl Locale {
    /// Returns the vocabulary for this locale.
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Locale::Fr => &FRENCH,
            Locale::En => &ENGLISH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = StoryError;

    /// Accepts a bare language code or a region-qualified tag such as `fr-FR` or `en_GB`.
    fn from_str(s: &str) -> StoryResult<Self> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            _ => Err(StoryError::UnknownLocale(s.to_owned())),
        }
    }
}
