//! Story record domain type and its JSON/YAML boundary.
//!
//! The UI stores stories as loosely typed camelCase objects with many fields the narrative
//! subsystem does not care about. This module reads just the four fields it needs into a
//! [`StoryRecord`] with explicit absent states.
//!
//! Responsibilities:
//! - Define the domain-level [`StoryRecord`]
//! - Define a lenient wire model for deserialisation (unknown keys are ignored)
//! - Translate wire values into domain values, rejecting unknown priorities

use crate::locale::Locale;
use crate::narrative::{parse_description, NarrativeComponents};
use crate::{StoryError, StoryResult};
use serde::Deserialize;
use story_types::Priority;

// ============================================================================
// Public domain-level types
// ============================================================================

/// The parts of a user story the narrative subsystem reads.
///
/// Text fields are kept verbatim; deciding whether a blank value counts as missing is the
/// validator's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoryRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub product_id: Option<String>,
    pub priority: Option<Priority>,
}

impl StoryRecord {
    /// Parse a story record from the UI's JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::InvalidJson` if the text is not a JSON object, or
    /// `StoryError::Translation` naming the failing field path when a known field has an
    /// unexpected type or an unknown priority.
    pub fn from_json(json_text: &str) -> StoryResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let wire = match serde_path_to_error::deserialize::<_, StoryRecordWire>(&mut deserializer)
        {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                if path.is_empty() || path == "." {
                    return Err(StoryError::InvalidJson(source));
                }
                return Err(StoryError::Translation(format!(
                    "Story record schema mismatch at {path}: {source}"
                )));
            }
        };
        deserializer.end().map_err(StoryError::InvalidJson)?;

        wire_to_domain(wire)
    }

    /// Parse a story record from YAML text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StoryRecord::from_json`], reported as `StoryError::InvalidYaml`
    /// for document-level failures.
    pub fn from_yaml(yaml_text: &str) -> StoryResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, StoryRecordWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                if path.is_empty() || path == "." {
                    return Err(StoryError::InvalidYaml(source));
                }
                return Err(StoryError::Translation(format!(
                    "Story record schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Attempts to decompose this story's description into narrative components.
    pub fn narrative(&self, locale: Locale) -> Option<NarrativeComponents> {
        parse_description(self.description.as_deref(), locale)
    }
}

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryRecordWire {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    product_id: Option<IdentifierWire>,
    #[serde(default)]
    priority: Option<String>,
}

/// Product references are strings in newer stores and numeric timestamps in older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdentifierWire {
    Text(String),
    Integer(i64),
}

fn wire_to_domain(wire: StoryRecordWire) -> StoryResult<StoryRecord> {
    let product_id = wire.product_id.map(|id| match id {
        IdentifierWire::Text(text) => text,
        IdentifierWire::Integer(number) => number.to_string(),
    });

    // An unselected priority is stored as an empty string.
    let priority = wire
        .priority
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            p.parse::<Priority>()
                .map_err(|e| StoryError::Translation(format!("priority: {e}")))
        })
        .transpose()?;

    Ok(StoryRecord {
        title: wire.title,
        description: wire.description,
        product_id,
        priority,
    })
}
