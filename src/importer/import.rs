//! Orchestrate a bulk import: read text, optionally normalize, parse.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use super::models::ImportReport;
use super::normalizer::format_bulk_text;
use super::parser::parse_bulk_text;
use super::util::normalize_line_endings;

/// Read pasted text from a file, or from stdin when `path` is `-`.
pub fn read_bulk_text(path: &Path) -> anyhow::Result<String> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(normalize_line_endings(&raw))
}

/// Parse `text` into drafts, running the normalizer first when `normalize` is set.
pub fn import_bulk_text(text: &str, normalize: bool) -> ImportReport {
    let normalized = normalize.then(|| format_bulk_text(text));
    let source = normalized.as_deref().unwrap_or(text);
    let drafts = parse_bulk_text(source);
    log::debug!(
        "parsed {} question(s) from {} byte(s) of text",
        drafts.len(),
        source.len()
    );

    let report = ImportReport { normalized, drafts };
    for (i, draft) in report.unanswered() {
        log::warn!(
            "question {} ({:?}) has no resolved correct answer",
            i + 1,
            draft.text
        );
    }
    report
}
