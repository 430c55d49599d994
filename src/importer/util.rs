//! Shared utilities for pasted-text cleanup.

/// Clean pasted quiz text: CRLF and lone CR become `\n`, a leading BOM is dropped.
pub fn normalize_line_endings(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let s = text.replace("\r\n", "\n").replace('\r', "\n");
    if let Some(rest) = s.strip_prefix('\u{feff}') {
        return rest.to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_line_endings_empty() {
        assert_eq!(normalize_line_endings(""), "");
    }

    #[test]
    fn normalize_line_endings_bom() {
        assert_eq!(normalize_line_endings("\u{feff}1. Q"), "1. Q");
    }

    #[test]
    fn normalize_line_endings_crlf() {
        assert!(!normalize_line_endings("1. Q\r\nA. x\rB. y").contains('\r'));
        assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
    }
}
