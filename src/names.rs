//! Output name assignment.
//!
//! Validates a user-supplied name list against the number of groups being
//! extracted, or falls back to ordinal names when no list is supplied.
//! Duplicate and count diagnostics are first-class output so the session
//! author can fix the list without re-running anything else.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::constants::ILLEGAL_FILENAME_CHARS;
use crate::error::{Error, Result};

/// Resolve output names for `requested` segments.
///
/// Without a candidate list this produces `"1"`, `"2"`, ... as a safe
/// default. With one, each candidate is sanitized and the list must then
/// contain exactly `requested` unique names.
///
/// # Errors
///
/// Returns [`Error::NameValidation`] carrying the expected count, the
/// actual count, and every sanitized name that occurs more than once.
pub fn assign(requested: usize, candidates: Option<Vec<String>>) -> Result<Vec<String>> {
    let Some(raw) = candidates else {
        return Ok((1..=requested).map(|n| n.to_string()).collect());
    };

    let sanitized: Vec<String> = raw.iter().map(|name| sanitize(name)).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &sanitized {
        *counts.entry(name).or_insert(0) += 1;
    }
    let mut duplicates: Vec<String> = Vec::new();
    for name in &sanitized {
        if counts[name.as_str()] > 1 && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }

    if sanitized.len() != requested || !duplicates.is_empty() {
        return Err(Error::NameValidation {
            expected: requested,
            actual: sanitized.len(),
            duplicates,
        });
    }

    Ok(sanitized)
}

/// Strip characters that are illegal in filesystem names.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c))
        .collect()
}

/// Load the candidate name list, one name per line.
///
/// An absent file is not an error: it selects the ordinal fallback, with
/// a warning so the omission is visible.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file exists but cannot be
/// read.
pub fn load_name_list(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        warn!(
            "name list '{}' not found, falling back to ordinal names",
            path.display()
        );
        return Ok(None);
    }

    let text = fs::read_to_string(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Some(text.lines().map(ToString::to_string).collect()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn names(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_fallback_is_ordinal() {
        assert_eq!(assign(2, None).unwrap(), vec!["1", "2"]);
        assert!(assign(0, None).unwrap().is_empty());
    }

    #[test]
    fn test_valid_list_passes_through() {
        assert_eq!(
            assign(2, names(&["intro", "outro"])).unwrap(),
            vec!["intro", "outro"]
        );
    }

    #[test]
    fn test_duplicates_fail_even_when_count_matches() {
        let err = assign(3, names(&["a", "b", "a"])).unwrap_err();
        match err {
            Error::NameValidation {
                expected,
                actual,
                duplicates,
            } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 3);
                assert_eq!(duplicates, vec!["a"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_count_mismatch_fails() {
        let err = assign(3, names(&["a", "b"])).unwrap_err();
        match err {
            Error::NameValidation {
                expected,
                actual,
                duplicates,
            } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
                assert!(duplicates.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sanitize_removes_illegal_characters() {
        assert_eq!(sanitize(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
        assert_eq!(sanitize("take 1"), "take 1");
    }

    #[test]
    fn test_duplicates_detected_after_sanitization() {
        // "in/tro" sanitizes to "intro" and collides with the literal one.
        let err = assign(2, names(&["intro", "in/tro"])).unwrap_err();
        match err {
            Error::NameValidation { duplicates, .. } => {
                assert_eq!(duplicates, vec!["intro"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_name_list_missing_file_is_fallback() {
        assert!(
            load_name_list(Path::new("/nonexistent/names.txt"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_load_name_list_reads_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "intro\r\noutro\n").unwrap();
        file.flush().unwrap();

        let list = load_name_list(file.path()).unwrap().unwrap();
        assert_eq!(list, vec!["intro", "outro"]);
    }
}
