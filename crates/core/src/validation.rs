//! Required-field validation for story records.
//!
//! A text field counts as missing when it is absent or the empty string; whitespace-only text
//! is present. Priority counts as missing only when absent. Missing fields are always reported
//! in the same order (title, description, product, priority) so the UI can render a stable list.

use crate::locale::Locale;
use crate::record::StoryRecord;
use serde::{Deserialize, Serialize};

/// Fields a story must have before it can be saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoryField {
    Title,
    Description,
    Product,
    Priority,
}

impl StoryField {
    /// All required fields in reporting order.
    pub const ALL: [StoryField; 4] = [
        StoryField::Title,
        StoryField::Description,
        StoryField::Product,
        StoryField::Priority,
    ];

    /// Human-readable label for the field.
    pub fn label(self, locale: Locale) -> &'static str {
        let vocabulary = locale.vocabulary();
        match self {
            StoryField::Title => vocabulary.title_label,
            StoryField::Description => vocabulary.description_label,
            StoryField::Product => vocabulary.product_label,
            StoryField::Priority => vocabulary.priority_label,
        }
    }

    fn is_missing(self, story: &StoryRecord) -> bool {
        fn empty(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, str::is_empty)
        }

        match self {
            StoryField::Title => empty(&story.title),
            StoryField::Description => empty(&story.description),
            StoryField::Product => empty(&story.product_id),
            StoryField::Priority => story.priority.is_none(),
        }
    }
}

/// Outcome of [`validate_story`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub missing_fields: Vec<String>,
}

impl ValidationResult {
    fn from_missing(missing_fields: Vec<String>) -> Self {
        Self {
            is_valid: missing_fields.is_empty(),
            missing_fields,
        }
    }
}

/// Reports which required fields of `story` are missing.
pub fn validate_story(story: &StoryRecord, locale: Locale) -> ValidationResult {
    let missing: Vec<String> = StoryField::ALL
        .iter()
        .filter(|field| field.is_missing(story))
        .map(|field| field.label(locale).to_owned())
        .collect();

    tracing::debug!(missing = missing.len(), "validated story record");

    ValidationResult::from_missing(missing)
}
