//! Rewrite loosely formatted quiz text into the canonical bulk-import shape.
//!
//! Canonical text looks like:
//!
//! ```text
//! 1. Question text
//! A. first option
//! B. second option
//! ✅ Correct Answer: B
//!
//! 2. ...
//! ```
//!
//! The passes below run in a fixed order; later passes rely on the output of
//! earlier ones (the answer-key pass expects option markers to be settled, the
//! spacing pass expects canonical answer-key lines).

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::constants::{alternation, CANONICAL_ANSWER_PREFIX, NORMALIZER_ANSWER_KEYWORDS};

/// `Q.1:`, `q 2)`, `Q.3.` at line start
static QUESTION_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// `Q1.` at line start
static COMPACT_QUESTION_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// `a)`, `(b)`, `c.` at line start. Only a–d: options past D are left alone.
static OPTION_MARKER_RE: OnceLock<Regex> = OnceLock::new();

/// `Ans: B`, `Answer - c`, `Key D` alone on a line
static ANSWER_KEY_RE: OnceLock<Regex> = OnceLock::new();

/// Canonical answer-key line directly followed by the next question number
static ANSWER_THEN_QUESTION_RE: OnceLock<Regex> = OnceLock::new();

static EXCESS_NEWLINES_RE: OnceLock<Regex> = OnceLock::new();

fn question_prefix_re() -> &'static Regex {
    QUESTION_PREFIX_RE
        .get_or_init(|| Regex::new(r"(?im)(?:^|\n)Q\.?\s?([0-9]+)[:.)]").unwrap())
}

fn compact_question_prefix_re() -> &'static Regex {
    COMPACT_QUESTION_PREFIX_RE.get_or_init(|| Regex::new(r"(?im)(?:^|\n)Q([0-9]+)\.").unwrap())
}

fn option_marker_re() -> &'static Regex {
    OPTION_MARKER_RE.get_or_init(|| Regex::new(r"(?im)(?:^|\n)\(?([a-d])[).]\s?").unwrap())
}

fn answer_key_re() -> &'static Regex {
    ANSWER_KEY_RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?im)(?:^|\n)\s*(?:{})[:\s-]*([A-D])(?:$|\n)",
            alternation(NORMALIZER_ANSWER_KEYWORDS)
        ))
        .unwrap()
    })
}

fn answer_then_question_re() -> &'static Regex {
    ANSWER_THEN_QUESTION_RE.get_or_init(|| {
        Regex::new(&format!(
            r"(\n{}[A-D])\s*([0-9]+\.)",
            regex::escape(CANONICAL_ANSWER_PREFIX)
        ))
        .unwrap()
    })
}

fn excess_newlines_re() -> &'static Regex {
    EXCESS_NEWLINES_RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Upper-cased first capture group, or empty when the group did not take part.
fn upper_group(caps: &Captures<'_>) -> String {
    caps.get(1)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_default()
}

/// Rewrite question-number prefixes (`Q1.`, `Q.1)`, `q 1:`) to `<n>.` on a fresh line.
pub fn normalize_question_prefixes(text: &str) -> String {
    let text = question_prefix_re().replace_all(text, "\n${1}.");
    compact_question_prefix_re()
        .replace_all(&text, "\n${1}.")
        .into_owned()
}

/// Rewrite option markers `a)`, `(a)`, `a.` (letters a–d, any case) to `A. `.
pub fn normalize_option_markers(text: &str) -> String {
    option_marker_re()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("\n{}. ", upper_group(caps))
        })
        .into_owned()
}

/// Rewrite `Ans: B`, `Answer - B`, `Key B`, ... to an isolated `✅ Correct Answer: B` line.
/// The letter keeps the case it was written in.
pub fn normalize_answer_keys(text: &str) -> String {
    answer_key_re()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("\n{}{}\n", CANONICAL_ANSWER_PREFIX, &caps[1])
        })
        .into_owned()
}

/// Put a blank line between an answer key and the question number that follows it.
pub fn separate_questions(text: &str) -> String {
    answer_then_question_re()
        .replace_all(text, "${1}\n\n${2}")
        .into_owned()
}

/// Collapse runs of three or more line breaks into one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    excess_newlines_re().replace_all(text, "\n\n").into_owned()
}

/// Run every normalization pass in order. Never fails; empty input stays empty.
pub fn format_bulk_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = normalize_question_prefixes(text);
    let text = normalize_option_markers(&text);
    let text = normalize_answer_keys(&text);
    let text = separate_questions(&text);
    collapse_blank_lines(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_prefix_variants() {
        assert_eq!(normalize_question_prefixes("Q1. What?"), "\n1. What?");
        assert_eq!(normalize_question_prefixes("x\nQ.2) Why?"), "x\n2. Why?");
        assert_eq!(normalize_question_prefixes("x\nq 3: How?"), "x\n3. How?");
        assert_eq!(normalize_question_prefixes("x\nQ.4. When?"), "x\n4. When?");
    }

    #[test]
    fn question_prefix_ignores_words_starting_with_q() {
        let text = "1. Quick question\nQuality matters";
        assert_eq!(normalize_question_prefixes(text), text);
    }

    #[test]
    fn option_marker_variants() {
        assert_eq!(normalize_option_markers("x\na) one"), "x\nA. one");
        assert_eq!(normalize_option_markers("x\n(b) two"), "x\nB. two");
        assert_eq!(normalize_option_markers("x\nC. three"), "x\nC. three");
        assert_eq!(normalize_option_markers("x\nd.four"), "x\nD. four");
    }

    #[test]
    fn option_marker_stops_at_d() {
        let text = "x\ne) five";
        assert_eq!(normalize_option_markers(text), text);
    }

    #[test]
    fn answer_key_letter_keeps_case() {
        assert_eq!(
            normalize_answer_keys("B. y\nans: c"),
            "B. y\n✅ Correct Answer: c\n"
        );
        assert_eq!(
            normalize_answer_keys("B. y\nANS: C"),
            "B. y\n✅ Correct Answer: C\n"
        );
    }

    #[test]
    fn answer_key_needs_letter_at_line_end() {
        let text = "1. Answer briefly\nA. ok";
        assert_eq!(normalize_answer_keys(text), text);
    }

    #[test]
    fn separate_questions_inserts_blank_line() {
        assert_eq!(
            separate_questions("x\n✅ Correct Answer: A\n2. Next"),
            "x\n✅ Correct Answer: A\n\n2. Next"
        );
    }

    #[test]
    fn collapse_blank_lines_keeps_single_blank() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn format_empty_is_noop() {
        assert_eq!(format_bulk_text(""), "");
    }
}
