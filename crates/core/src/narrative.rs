//! Parsing and generation of the canonical user story narrative.
//!
//! A narrative has the shape `<role marker> <role>, <action marker> <action> <benefit marker>
//! <benefit>`, for example "As a user, I want to log in in order to see my data".
//!
//! Parsing runs three independent extractions against the original text. Markers are matched
//! case-insensitively as plain substrings:
//! - role: after the role marker, up to the next `,`, `.` or action marker
//! - action: after the action marker, up to the next `,`, `.` or benefit marker
//! - benefit: after the benefit marker, up to the next `.` or the end of the text
//!
//! Each span is trimmed. The result is all-or-nothing: if any span is missing or empty the
//! parser returns `None` rather than a partially filled narrative.
//!
//! Generation is the inverse, as long as no component itself contains a marker phrase or a
//! clause terminator.

use crate::constants::{CLAUSE_TERMINATORS, SENTENCE_TERMINATOR};
use crate::locale::Locale;
use crate::StoryResult;
use serde::{Deserialize, Serialize};
use story_types::NonEmptyText;

/// A fully parsed narrative.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NarrativeComponents {
    /// Who wants the feature.
    pub role: NonEmptyText,
    /// What they want to do.
    pub action: NonEmptyText,
    /// Why they want it.
    pub benefit: NonEmptyText,
}

impl NarrativeComponents {
    /// Builds a narrative from raw component text.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Text` if any component is empty or whitespace-only.
    pub fn new(
        role: impl AsRef<str>,
        action: impl AsRef<str>,
        benefit: impl AsRef<str>,
    ) -> StoryResult<Self> {
        Ok(Self {
            role: NonEmptyText::new(role)?,
            action: NonEmptyText::new(action)?,
            benefit: NonEmptyText::new(benefit)?,
        })
    }

    /// Renders the narrative with the locale's template.
    pub fn render(&self, locale: Locale) -> String {
        render_template(
            self.role.as_str(),
            self.action.as_str(),
            self.benefit.as_str(),
            locale,
        )
    }
}

/// Structured form input for generating a narrative.
///
/// Each field may be absent while the user is still filling the form in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeDraft {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub benefit: Option<String>,
}

impl From<NarrativeComponents> for NarrativeDraft {
    fn from(components: NarrativeComponents) -> Self {
        Self {
            role: Some(components.role.into_inner()),
            action: Some(components.action.into_inner()),
            benefit: Some(components.benefit.into_inner()),
        }
    }
}

/// Generates a story description from form input.
///
/// Returns an empty string unless all three components are present and non-empty. Values are
/// substituted verbatim.
pub fn generate_title(draft: &NarrativeDraft, locale: Locale) -> String {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    match (
        present(&draft.role),
        present(&draft.action),
        present(&draft.benefit),
    ) {
        (Some(role), Some(action), Some(benefit)) => {
            render_template(role, action, benefit, locale)
        }
        _ => String::new(),
    }
}

/// Decomposes a description into narrative components.
///
/// Returns `None` for absent or empty input, or when any component cannot be extracted.
pub fn parse_description(description: Option<&str>, locale: Locale) -> Option<NarrativeComponents> {
    let text = description.filter(|d| !d.is_empty())?;
    let vocabulary = locale.vocabulary();

    let role = extract_span(
        text,
        vocabulary.role_marker,
        &CLAUSE_TERMINATORS,
        Some(vocabulary.action_marker),
        SpanEnd::Required,
    );
    let action = extract_span(
        text,
        vocabulary.action_marker,
        &CLAUSE_TERMINATORS,
        Some(vocabulary.benefit_marker),
        SpanEnd::Required,
    );
    let benefit = extract_span(
        text,
        vocabulary.benefit_marker,
        &[SENTENCE_TERMINATOR],
        None,
        SpanEnd::OrEndOfText,
    );

    match (role, action, benefit) {
        (Some(role), Some(action), Some(benefit)) => Some(NarrativeComponents {
            role,
            action,
            benefit,
        }),
        (role, action, benefit) => {
            tracing::debug!(
                locale = %locale,
                role = role.is_some(),
                action = action.is_some(),
                benefit = benefit.is_some(),
                "description does not decompose into a narrative"
            );
            None
        }
    }
}

fn render_template(role: &str, action: &str, benefit: &str, locale: Locale) -> String {
    let vocabulary = locale.vocabulary();
    format!(
        "{} {}, {} {} {} {}",
        vocabulary.role_marker,
        role,
        vocabulary.action_marker,
        action,
        vocabulary.benefit_marker,
        benefit
    )
}

/// Whether a span may run to the end of the text when no terminator follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpanEnd {
    Required,
    OrEndOfText,
}

fn extract_span(
    text: &str,
    marker: &str,
    stop_chars: &[char],
    stop_marker: Option<&str>,
    span_end: SpanEnd,
) -> Option<NonEmptyText> {
    let (_, content_start) = find_ignore_case(text, marker)?;
    let rest = &text[content_start..];

    let char_stop = rest.find(stop_chars);
    let marker_stop = stop_marker.and_then(|m| find_ignore_case(rest, m).map(|(start, _)| start));

    let end = match (char_stop, marker_stop) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => match span_end {
            SpanEnd::Required => return None,
            SpanEnd::OrEndOfText => rest.len(),
        },
    };

    NonEmptyText::new(&rest[..end]).ok()
}

/// Case-insensitive substring search returning byte offsets into `haystack`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    haystack.char_indices().find_map(|(start, _)| {
        prefix_len_ignore_case(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

fn prefix_len_ignore_case(text: &str, needle: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in needle.chars() {
        let (_, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoryError;

    fn draft(role: Option<&str>, action: Option<&str>, benefit: Option<&str>) -> NarrativeDraft {
        NarrativeDraft {
            role: role.map(str::to_owned),
            action: action.map(str::to_owned),
            benefit: benefit.map(str::to_owned),
        }
    }

    #[test]
    fn test_generate_title_english_template() {
        let title = generate_title(
            &draft(Some("user"), Some("log in"), Some("access my data")),
            Locale::En,
        );
        assert_eq!(title, "As a user, I want log in in order to access my data");
    }

    #[test]
    fn test_generate_title_french_template() {
        let title = generate_title(
            &draft(Some("utilisateur"), Some("me connecter"), Some("voir mes données")),
            Locale::Fr,
        );
        assert_eq!(
            title,
            "En tant que utilisateur, je veux me connecter afin de voir mes données"
        );
    }

    #[test]
    fn test_generate_title_requires_all_components() {
        assert_eq!(
            generate_title(&draft(Some("user"), None, Some("x")), Locale::En),
            ""
        );
        assert_eq!(
            generate_title(&draft(Some("user"), Some(""), Some("x")), Locale::En),
            ""
        );
        assert_eq!(generate_title(&NarrativeDraft::default(), Locale::Fr), "");
    }

    #[test]
    fn test_generate_title_substitutes_verbatim() {
        let title = generate_title(&draft(Some(" User "), Some("A"), Some("b")), Locale::En);
        assert_eq!(title, "As a  User , I want A in order to b");
    }

    #[test]
    fn test_roundtrip_english() {
        let title = generate_title(
            &draft(Some("user"), Some("log in"), Some("access my data")),
            Locale::En,
        );
        let parsed = parse_description(Some(&title), Locale::En).unwrap();
        assert_eq!(
            parsed,
            NarrativeComponents::new("user", "log in", "access my data").unwrap()
        );
    }

    #[test]
    fn test_roundtrip_french() {
        let components =
            NarrativeComponents::new("chef de produit", "prioriser le backlog", "livrer plus tôt")
                .unwrap();
        let rendered = components.render(Locale::Fr);
        assert_eq!(
            parse_description(Some(&rendered), Locale::Fr),
            Some(components)
        );
    }

    #[test]
    fn test_roundtrip_through_draft() {
        let components = NarrativeComponents::new("admin", "reset passwords", "unblock users")
            .unwrap();
        let title = generate_title(&NarrativeDraft::from(components.clone()), Locale::En);
        assert_eq!(parse_description(Some(&title), Locale::En), Some(components));
    }

    #[test]
    fn test_roundtrip_breaks_when_component_contains_terminator() {
        let title = generate_title(
            &draft(Some("user, admin"), Some("log in"), Some("work")),
            Locale::En,
        );
        let parsed = parse_description(Some(&title), Locale::En).unwrap();
        assert_eq!(parsed.role.as_str(), "user");
    }

    #[test]
    fn test_parse_description_absent_or_empty() {
        assert_eq!(parse_description(None, Locale::En), None);
        assert_eq!(parse_description(Some(""), Locale::En), None);
    }

    #[test]
    fn test_parse_description_missing_benefit_is_none() {
        assert_eq!(parse_description(Some("As a user, I want"), Locale::En), None);
        assert_eq!(
            parse_description(Some("As a user, I want to log in."), Locale::En),
            None
        );
    }

    #[test]
    fn test_parse_description_empty_capture_is_none() {
        assert_eq!(
            parse_description(Some("As a , I want x in order to y"), Locale::En),
            None
        );
        assert_eq!(
            parse_description(Some("As a user, I want x in order to ."), Locale::En),
            None
        );
    }

    #[test]
    fn test_parse_description_is_case_insensitive() {
        let parsed =
            parse_description(Some("as a Tester, i want Reports IN ORDER TO Sleep"), Locale::En)
                .unwrap();
        assert_eq!(parsed.role.as_str(), "Tester");
        assert_eq!(parsed.action.as_str(), "Reports");
        assert_eq!(parsed.benefit.as_str(), "Sleep");
    }

    #[test]
    fn test_parse_description_benefit_stops_at_period() {
        let parsed = parse_description(
            Some("As a user, I want exports in order to share them. Extra notes."),
            Locale::En,
        )
        .unwrap();
        assert_eq!(parsed.benefit.as_str(), "share them");
    }

    #[test]
    fn test_parse_description_role_stops_at_action_marker() {
        let parsed =
            parse_description(Some("As a user I want exports in order to share"), Locale::En)
                .unwrap();
        assert_eq!(parsed.role.as_str(), "user");
        assert_eq!(parsed.action.as_str(), "exports");
    }

    #[test]
    fn test_parse_description_reversed_order_without_terminators_is_none() {
        assert_eq!(
            parse_description(
                Some("in order to share, I want to export, As a manager"),
                Locale::En
            ),
            None
        );
    }

    #[test]
    fn test_parse_description_matches_markers_inside_words() {
        let parsed =
            parse_description(Some("As an admin, I want x in order to y"), Locale::En).unwrap();
        assert_eq!(parsed.role.as_str(), "n admin");

        let parsed =
            parse_description(Some("As a user, I wanted x in order to y"), Locale::En).unwrap();
        assert_eq!(parsed.role.as_str(), "user");
        assert_eq!(parsed.action.as_str(), "ed x");

        let parsed = parse_description(
            Some("Has a backlog. As a user, I want x in order to y"),
            Locale::En,
        )
        .unwrap();
        assert_eq!(parsed.role.as_str(), "backlog");
    }

    #[test]
    fn test_parse_description_handles_multibyte_text() {
        let parsed = parse_description(
            Some("EN TANT QUE développeur, JE VEUX déployer afin de réduire l'écart."),
            Locale::Fr,
        )
        .unwrap();
        assert_eq!(parsed.role.as_str(), "développeur");
        assert_eq!(parsed.action.as_str(), "déployer");
        assert_eq!(parsed.benefit.as_str(), "réduire l'écart");
    }

    #[test]
    fn test_narrative_components_rejects_blank() {
        let err = NarrativeComponents::new("user", "  ", "x").expect_err("should reject");
        assert!(matches!(err, StoryError::Text(_)));
    }

    #[test]
    fn test_find_ignore_case_offsets() {
        assert_eq!(find_ignore_case("abc I WANT", "i want"), Some((4, 10)));
        assert_eq!(find_ignore_case("été JE veux", "je veux"), Some((6, 13)));
        assert_eq!(find_ignore_case("abc", "abcd"), None);
        assert_eq!(find_ignore_case("abc", ""), None);
    }
}
