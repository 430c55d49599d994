//! Data models for question drafts and import results.

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_POINTS;

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Text,
}

/// An unsaved quiz question held in the authoring session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    /// Text of the correct option; empty when the answer key did not resolve.
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

impl QuestionDraft {
    /// The placeholder a fresh authoring session starts with.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            kind: QuestionType::Text,
            options: Vec::new(),
            correct_answer: String::new(),
            points: DEFAULT_POINTS,
        }
    }

    /// A multiple-choice draft as produced by the bulk parser.
    pub fn multiple_choice(text: String, options: Vec<String>, correct_answer: String) -> Self {
        Self {
            text,
            kind: QuestionType::MultipleChoice,
            options,
            correct_answer,
            points: DEFAULT_POINTS,
        }
    }

    /// True while the question text has not been filled in.
    pub fn is_untouched(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_answer(&self) -> bool {
        !self.correct_answer.is_empty()
    }

    /// Multiple-choice drafts must name one of their own options, or nothing.
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            QuestionType::MultipleChoice => {
                !self.has_answer() || self.options.contains(&self.correct_answer)
            }
            QuestionType::Text => true,
        }
    }
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self::empty()
    }
}

/// Classification of a single trimmed line inside a question block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Answer key; carries the letter as written.
    AnswerKey(char),
    /// Option line; carries the text after the marker.
    Option(String),
    QuestionText,
}

/// Result of one bulk import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rewritten text when the normalizer ran.
    pub normalized: Option<String>,
    pub drafts: Vec<QuestionDraft>,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Drafts whose answer key did not resolve to one of their options.
    pub fn unanswered(&self) -> impl Iterator<Item = (usize, &QuestionDraft)> {
        self.drafts
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.has_answer())
    }
}

/// Points earned against points available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub score: u32,
    pub total_points: u32,
}
