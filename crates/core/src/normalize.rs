//! Whitespace normalisation for free-form story descriptions.
//!
//! Descriptions pasted from other tools tend to carry ragged indentation, stray tabs and long
//! stacks of blank lines. [`clean_description`] reduces them to single spaces while keeping
//! paragraph breaks.
//!
//! Rules, applied to each maximal run of whitespace after trimming the ends:
//! - a run containing two or more line feeds becomes exactly `"\n\n"`
//! - any other run becomes a single space
//!
//! The output only ever contains `" "` and `"\n\n"` as separators, which both map to
//! themselves, so the function is idempotent.

/// Paragraph separator emitted for runs with two or more line feeds.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Normalises whitespace in a story description.
///
/// Returns an empty string for `None`.
pub fn clean_description(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let trimmed = text.trim();
    let mut output = String::with_capacity(trimmed.len());
    let mut in_run = false;
    let mut line_feeds = 0usize;

    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            in_run = true;
            if ch == '\n' {
                line_feeds += 1;
            }
            continue;
        }

        if in_run {
            if line_feeds >= 2 {
                output.push_str(PARAGRAPH_BREAK);
            } else {
                output.push(' ');
            }
            in_run = false;
            line_feeds = 0;
        }
        output.push(ch);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_description_absent_is_empty() {
        assert_eq!(clean_description(None), "");
        assert_eq!(clean_description(Some("")), "");
        assert_eq!(clean_description(Some(" \n\t ")), "");
    }

    #[test]
    fn test_clean_description_collapses_long_newline_runs() {
        assert_eq!(clean_description(Some("a\n\n\n\nb")), "a\n\nb");
        assert_eq!(clean_description(Some("a\n\n\nb")), "a\n\nb");
    }

    #[test]
    fn test_clean_description_keeps_paragraph_breaks() {
        assert_eq!(clean_description(Some("a\n\nb")), "a\n\nb");
        assert_eq!(clean_description(Some("a  \n \n  b")), "a\n\nb");
        assert_eq!(clean_description(Some("a\r\n\r\nb")), "a\n\nb");
    }

    #[test]
    fn test_clean_description_collapses_inline_whitespace() {
        assert_eq!(clean_description(Some("  a   b \t c  ")), "a b c");
        assert_eq!(clean_description(Some("line one\nline two")), "line one line two");
    }

    #[test]
    fn test_clean_description_is_idempotent() {
        let samples = [
            "",
            "plain",
            "  leading and trailing  ",
            "a\n\n\n\nb",
            "a \n b\n\n\n\n\tc   d",
            "\r\n\r\nEn tant que  utilisateur,\n je veux\t\tme connecter\n\n\n afin de voir mes données",
            "unicode\u{00A0}\u{2003}spaces",
        ];

        for sample in samples {
            let once = clean_description(Some(sample));
            let twice = clean_description(Some(&once));
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_clean_description_treats_unicode_spaces_as_whitespace() {
        assert_eq!(
            clean_description(Some("unicode\u{00A0}\u{2003}spaces")),
            "unicode spaces"
        );
    }
}
