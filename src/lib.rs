//! Normalize and parse bulk-pasted quiz text into structured question drafts.

pub mod cli;
pub mod importer;

pub use cli::{run, Args};
pub use importer::{
    format_bulk_text, grade_answers, import_bulk_text, merge_drafts, parse_bulk_text,
    ImportReport, QuestionDraft, QuestionType, Score,
};
