//! Format recognition and the "needs reformatting" warning.
//!
//! The recognizer is deliberately lenient: it only checks that the three marker phrases
//! appear somewhere in the description, in any order. It can therefore report a description as
//! properly formatted even when [`crate::narrative::parse_description`] cannot decompose it.

use crate::locale::Locale;
use crate::record::StoryRecord;
use serde::{Deserialize, Serialize};

/// How much copy the warning should carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningMode {
    /// Title only, for badges and list rows.
    #[default]
    Compact,
    /// Title plus an explanation of the expected template.
    Full,
}

impl WarningMode {
    /// Maps a UI label to a mode. Unrecognised labels fall back to [`WarningMode::Compact`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "full" => WarningMode::Full,
            "compact" => WarningMode::Compact,
            other => {
                tracing::debug!(label = other, "unknown warning mode, using compact");
                WarningMode::Compact
            }
        }
    }
}

/// User-facing warning copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningPayload {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Returns whether the story's description contains all three marker phrases.
///
/// Matching is case-sensitive substring containment. Absent stories and absent or empty
/// descriptions are never properly formatted.
pub fn has_proper_format(story: Option<&StoryRecord>, locale: Locale) -> bool {
    let Some(description) = story
        .and_then(|s| s.description.as_deref())
        .filter(|d| !d.is_empty())
    else {
        return false;
    };

    let vocabulary = locale.vocabulary();
    [
        vocabulary.role_marker,
        vocabulary.action_marker,
        vocabulary.benefit_marker,
    ]
    .iter()
    .all(|marker| description.contains(marker))
}

/// Returns the warning shown for stories that fail [`has_proper_format`].
pub fn format_warning(mode: WarningMode, locale: Locale) -> WarningPayload {
    let vocabulary = locale.vocabulary();
    WarningPayload {
        title: vocabulary.warning_title.to_owned(),
        description: match mode {
            WarningMode::Compact => None,
            WarningMode::Full => Some(vocabulary.warning_description.to_owned()),
        },
    }
}
