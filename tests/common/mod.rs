//! Shared test helpers.

use std::path::PathBuf;

/// Create a temp dir and write files. Returns (guard, root). Paths are relative to root; parent dirs are created.
#[allow(dead_code)]
pub fn workspace(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

/// Pasted text in the loose style instructors copy from notes and generated banks.
#[allow(dead_code)]
pub const MESSY_TWO_QUESTIONS: &str = "Q1) What is 2+2?
a) 3
b) 4
Ans: B
Q2) Capital of France?
(a) Paris
(b) Rome
Answer - A";
