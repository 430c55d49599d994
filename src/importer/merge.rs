//! Fold imported drafts into an existing authoring session.

use super::models::QuestionDraft;

/// Merge `imported` into `existing`.
/// A session holding only its untouched placeholder is replaced outright;
/// otherwise imported drafts are appended. Nothing imported leaves `existing` as is.
pub fn merge_drafts(
    existing: Vec<QuestionDraft>,
    imported: Vec<QuestionDraft>,
) -> Vec<QuestionDraft> {
    if imported.is_empty() {
        return existing;
    }
    if existing.len() == 1 && existing[0].is_untouched() {
        return imported;
    }
    let mut merged = existing;
    merged.extend(imported);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc(text: &str) -> QuestionDraft {
        QuestionDraft::multiple_choice(text.into(), vec!["x".into()], String::new())
    }

    #[test]
    fn replaces_untouched_placeholder() {
        let merged = merge_drafts(vec![QuestionDraft::empty()], vec![mc("a"), mc("b")]);
        assert_eq!(merged, vec![mc("a"), mc("b")]);
    }

    #[test]
    fn appends_after_real_questions() {
        let merged = merge_drafts(vec![mc("a")], vec![mc("b")]);
        assert_eq!(merged, vec![mc("a"), mc("b")]);
    }

    #[test]
    fn keeps_placeholder_among_several() {
        let merged = merge_drafts(vec![mc("a"), QuestionDraft::empty()], vec![mc("b")]);
        assert_eq!(merged.len(), 3);
        assert!(merged[1].is_untouched());
    }

    #[test]
    fn empty_import_is_noop() {
        let merged = merge_drafts(vec![QuestionDraft::empty()], Vec::new());
        assert_eq!(merged, vec![QuestionDraft::empty()]);
    }

    #[test]
    fn empty_session_takes_imports() {
        assert_eq!(merge_drafts(Vec::new(), vec![mc("a")]), vec![mc("a")]);
    }
}
