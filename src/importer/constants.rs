//! Markers and defaults shared by the normalizer and the parser.

/// Glyph that opens a canonical answer-key line.
pub const CHECKMARK: char = '✅';

/// Canonical answer-key prefix written by the normalizer (letter follows).
pub const CANONICAL_ANSWER_PREFIX: &str = "✅ Correct Answer: ";

/// Points awarded to every parsed question.
pub const DEFAULT_POINTS: u32 = 1;

/// Keywords that introduce an answer key in pasted text, tried in this order.
/// `Ans` precedes `Answer`, so a raw `Answer: B` line reads as `Ans` + `w`.
pub const ANSWER_KEYWORDS: &[&str] = &["Correct Answer", "Correct", "Ans", "Answer", "Key"];

/// Keywords the normalizer rewrites into the canonical answer-key line.
pub const NORMALIZER_ANSWER_KEYWORDS: &[&str] =
    &["Ans", "Answer", "Correct Option", "Correct", "Key"];

/// Zero-based option index for an answer letter (A=0, b=1, ...); None for non-letters.
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Join keywords into a regex alternation body.
pub(crate) fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_upper_and_lower() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('b'), Some(1));
        assert_eq!(letter_index('Z'), Some(25));
    }

    #[test]
    fn letter_index_rejects_non_letters() {
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('é'), None);
    }

    #[test]
    fn alternation_escapes_and_joins() {
        assert_eq!(alternation(&["Ans", "Key"]), "Ans|Key");
        assert_eq!(alternation(&["Correct Answer"]), "Correct Answer");
    }
}
