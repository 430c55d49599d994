//! Normalize and parse bulk-pasted quiz text into question drafts.

mod constants;
mod drafts;
mod grading;
mod import;
mod merge;
mod models;
pub mod normalizer;
pub mod parser;
pub mod util;

pub use constants::{letter_index, CANONICAL_ANSWER_PREFIX, CHECKMARK, DEFAULT_POINTS};
pub use drafts::{load_drafts, save_drafts};
pub use grading::{effective_points, grade_answers, is_correct};
pub use import::{import_bulk_text, read_bulk_text};
pub use merge::merge_drafts;
pub use models::{ImportReport, LineKind, QuestionDraft, QuestionType, Score};
pub use normalizer::format_bulk_text;
pub use parser::{classify_line, parse_block, parse_bulk_text, split_blocks};
