//! # Story Core
//!
//! User story narrative logic for the product-management application.
//!
//! This crate recognises, parses, generates and validates the canonical agile sentence
//! "As a `<role>`, I want `<action>` in order to `<benefit>`" (French: "En tant que ...,
//! je veux ... afin de ..."):
//! - [`format`]: lenient marker check and the reformatting warning
//! - [`narrative`]: strict parsing into components and template generation
//! - [`validation`]: required-field report for story records
//! - [`normalize`]: whitespace cleanup for pasted descriptions
//!
//! Every operation is a pure function. None of them fail: absence is `None` and missing
//! fields are reported as data. Fallible code is limited to construction boundaries such as
//! [`StoryRecord::from_json`] and [`CoreConfig::from_locale_value`].
//!
//! **No UI or storage concerns**: rendering, persistence and routing belong to the callers.

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod locale;
pub mod narrative;
pub mod normalize;
pub mod record;
pub mod review;
pub mod validation;

pub use config::{locale_from_value, CoreConfig};
pub use error::{StoryError, StoryResult};
pub use format::{format_warning, has_proper_format, WarningMode, WarningPayload};
pub use locale::{Locale, Vocabulary};
pub use narrative::{generate_title, parse_description, NarrativeComponents, NarrativeDraft};
pub use normalize::clean_description;
pub use record::StoryRecord;
pub use review::{review_story, StoryReview};
pub use validation::{validate_story, StoryField, ValidationResult};

pub use story_types::{NonEmptyText, Priority};

/// Narrative operations bound to a configured locale.
#[derive(Clone, Debug, Default)]
pub struct NarrativeService {
    config: CoreConfig,
}

impl NarrativeService {
    /// Creates a new `NarrativeService` from resolved configuration.
    pub fn new(config: CoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn has_proper_format(&self, story: Option<&StoryRecord>) -> bool {
        format::has_proper_format(story, self.config.locale())
    }

    pub fn format_warning(&self, mode: WarningMode) -> WarningPayload {
        format::format_warning(mode, self.config.locale())
    }

    pub fn validate_story(&self, story: &StoryRecord) -> ValidationResult {
        validation::validate_story(story, self.config.locale())
    }

    pub fn generate_title(&self, draft: &NarrativeDraft) -> String {
        narrative::generate_title(draft, self.config.locale())
    }

    pub fn parse_description(&self, description: Option<&str>) -> Option<NarrativeComponents> {
        narrative::parse_description(description, self.config.locale())
    }

    pub fn clean_description(&self, text: Option<&str>) -> String {
        normalize::clean_description(text)
    }

    /// Runs validation and the format check in one call.
    pub fn review_story(&self, story: &StoryRecord, mode: WarningMode) -> StoryReview {
        review::review_story(story, mode, self.config.locale())
    }
}
