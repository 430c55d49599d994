//! Parse bulk-pasted quiz text into question drafts.
//!
//! Input is split into blocks at every line that starts with a question
//! number (`12.`) or `Q.`. Each block is then read line by line: answer-key
//! lines first, option lines second, everything else is question text.
//! Anything that does not fit is dropped silently; a block without question
//! text or without options yields nothing.

use std::sync::OnceLock;

use regex::Regex;

use super::constants::{alternation, letter_index, ANSWER_KEYWORDS, CHECKMARK};
use super::models::{LineKind, QuestionDraft};

/// Line break followed by `<digits>.` or `Q.`: start of the next block.
static BLOCK_START_RE: OnceLock<Regex> = OnceLock::new();

/// Optional checkmark, answer keyword, separators, then one letter.
static ANSWER_KEY_LINE_RE: OnceLock<Regex> = OnceLock::new();

/// One letter followed by `.` or `)`.
static OPTION_LINE_RE: OnceLock<Regex> = OnceLock::new();

/// Leading `<digits>.` numbering on question text.
static NUMBERING_RE: OnceLock<Regex> = OnceLock::new();

fn block_start_re() -> &'static Regex {
    BLOCK_START_RE.get_or_init(|| Regex::new(r"\n(?:[0-9]+\.|Q\.)").unwrap())
}

fn answer_key_line_re() -> &'static Regex {
    ANSWER_KEY_LINE_RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)^\s*(?:{}\s*)?(?:{})[:\s-]*([A-Z])",
            CHECKMARK,
            alternation(ANSWER_KEYWORDS)
        ))
        .unwrap()
    })
}

fn option_line_re() -> &'static Regex {
    OPTION_LINE_RE.get_or_init(|| Regex::new(r"^\s*([A-Za-z])[.)]\s*").unwrap())
}

fn numbering_re() -> &'static Regex {
    NUMBERING_RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s*").unwrap())
}

/// Split text into non-blank question blocks. The line break that starts a
/// block stays at its head. Text with no block marker at all is one block.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = block_start_re()
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&i| i > 0)
        .collect();
    starts.insert(0, 0);
    starts.push(text.len());

    let blocks: Vec<&str> = starts
        .windows(2)
        .map(|w| &text[w[0]..w[1]])
        .filter(|b| !b.trim().is_empty())
        .collect();
    if blocks.is_empty() {
        vec![text]
    } else {
        blocks
    }
}

/// Classify one trimmed line. The answer-key test runs before the option test.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = answer_key_line_re().captures(line) {
        let letter = caps[1].chars().next().unwrap_or('?');
        return LineKind::AnswerKey(letter);
    }
    if let Some(m) = option_line_re().find(line) {
        return LineKind::Option(line[m.end()..].trim().to_string());
    }
    LineKind::QuestionText
}

/// Read one block into a draft; None when it has no question text or no options.
pub fn parse_block(block: &str) -> Option<QuestionDraft> {
    let mut question_text = String::new();
    let mut options: Vec<String> = Vec::new();
    let mut correct_answer = String::new();
    let mut reading_options = false;

    let lines = block.trim().lines().map(str::trim).filter(|l| !l.is_empty());
    for line in lines {
        match classify_line(line) {
            LineKind::AnswerKey(letter) => {
                // Out-of-range letters leave the answer as it was.
                if let Some(opt) = letter_index(letter).and_then(|i| options.get(i)) {
                    correct_answer = opt.clone();
                }
            }
            LineKind::Option(text) => {
                reading_options = true;
                options.push(text);
            }
            LineKind::QuestionText => {
                if reading_options || line.starts_with(CHECKMARK) {
                    continue;
                }
                let clean = numbering_re().replace(line, "");
                if !question_text.is_empty() {
                    question_text.push(' ');
                }
                question_text.push_str(&clean);
            }
        }
    }

    if question_text.is_empty() || options.is_empty() {
        return None;
    }
    Some(QuestionDraft::multiple_choice(
        question_text,
        options,
        correct_answer,
    ))
}

/// Parse every block of `text`, in order. An empty result means nothing was recognised.
pub fn parse_bulk_text(text: &str) -> Vec<QuestionDraft> {
    split_blocks(text)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}
