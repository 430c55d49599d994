//! Draft file: the authoring session persisted as a JSON array of drafts.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::models::QuestionDraft;

/// Load drafts from `path`. A missing file is an empty session.
pub fn load_drafts(path: &Path) -> anyhow::Result<Vec<QuestionDraft>> {
    if !path.exists() {
        log::debug!("draft file {} not found, starting empty", path.display());
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read draft file {}", path.display()))?;
    let drafts: Vec<QuestionDraft> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse draft file {}", path.display()))?;
    log::debug!("loaded {} draft(s) from {}", drafts.len(), path.display());
    Ok(drafts)
}

/// Write drafts to `path` as pretty JSON, creating parent directories.
pub fn save_drafts(path: &Path, drafts: &[QuestionDraft]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(drafts)?;
    json.push('\n');
    fs::write(path, json)
        .with_context(|| format!("failed to write draft file {}", path.display()))?;
    log::debug!("wrote {} draft(s) to {}", drafts.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let drafts = load_drafts(&dir.path().join("none.json")).unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/drafts.json");
        save_drafts(&path, &[QuestionDraft::empty()]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("]\n"));
        assert!(text.contains("\n  {\n    \"text\": \"\""));
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_drafts(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.json"));
    }
}
