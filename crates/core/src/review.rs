//! Combined story check for editors and list views.

use crate::format::{format_warning, has_proper_format, WarningMode, WarningPayload};
use crate::locale::Locale;
use crate::record::StoryRecord;
use crate::validation::{validate_story, ValidationResult};
use serde::Serialize;

/// Required-field report plus the reformatting hint, if one applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryReview {
    pub validation: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_warning: Option<WarningPayload>,
}

/// Validates `story` and attaches a format warning when its description lacks the template.
pub fn review_story(story: &StoryRecord, mode: WarningMode, locale: Locale) -> StoryReview {
    let validation = validate_story(story, locale);
    let warning = (!has_proper_format(Some(story), locale)).then(|| format_warning(mode, locale));

    StoryReview {
        validation,
        format_warning: warning,
    }
}
