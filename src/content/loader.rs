//! Content file loading.
//!
//! The content file is read once per render (or once per cache fill in the server).
//! A missing file is fatal: the caller must stop before producing any output.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::ContentDocument;

/// Default location of the content file, relative to the working directory.
pub const DEFAULT_CONTENT_PATH: &str = "data/content.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{} not found. Create it and restart.", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the content file at `path`.
pub fn load_content(path: impl AsRef<Path>) -> Result<ContentDocument, ContentError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ContentError::NotFound { path: path.to_path_buf() });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_content(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded {} ({} timeline ranges, {} KPI categories, {} achievements)",
        path.display(),
        document.timeline_ranges.len(),
        document.matrix.len(),
        document.achievements.len()
    );
    Ok(document)
}

/// Parse content JSON held in memory.
///
/// Only a syntactically invalid document or a non-object root is an error; every
/// malformed field inside a valid object degrades to its default.
pub fn parse_content(raw: &str) -> Result<ContentDocument, serde_json::Error> {
    let root: serde_json::Value = serde_json::from_str(raw)?;
    if !root.is_object() {
        return Err(serde::de::Error::custom("content root must be a JSON object"));
    }
    serde_json::from_value(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        match load_content(&path) {
            Err(ContentError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = ContentError::NotFound { path: PathBuf::from(DEFAULT_CONTENT_PATH) };
        assert_eq!(err.to_string(), "data/content.json not found. Create it and restart.");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(load_content(file.path()), Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_load_minimal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Jordan Lee", "growth": ["Mentor two juniors"]}}"#).unwrap();

        let doc = load_content(file.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Jordan Lee"));
        assert_eq!(doc.growth, vec!["Mentor two juniors"]);
    }

    #[test]
    fn test_non_object_root_is_parse_error() {
        assert!(parse_content("[1, 2, 3]").is_err());
    }
}
