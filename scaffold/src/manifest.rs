//! Manifest loading: the JSON map from relative file path to file contents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// File name the CLI reads from the working directory by default.
pub const DEFAULT_MANIFEST_FILE: &str = "all-code.json";

/// Key under which an exported manifest describes itself.
pub const SELF_ENTRY: &str = "src/app/all-code.json";

/// Failures that abort a run before anything is written.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No file at the manifest path.
    #[error("manifest {} not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents are not a UTF-8 JSON object.
    #[error("decode manifest {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed manifest, iterated in document order.
///
/// Values are kept as raw JSON so a non-string value fails only its own entry
/// at write time instead of rejecting the whole document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    entries: Map<String, Value>,
}

impl Manifest {
    /// Decode a manifest document. The top level must be a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Self::from_slice(raw.as_bytes())
    }

    /// Decode raw manifest bytes. Invalid UTF-8 is a decode error like any other.
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        let entries: Map<String, Value> = serde_json::from_slice(raw)?;
        Ok(Self { entries })
    }

    /// Entries as `(relative path, content)` in the order they were parsed.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, content)| (key, Value::String(content)))
            .collect();
        Self { entries }
    }
}

/// Read and decode the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    debug!(path = %path.display(), "loading manifest");
    let raw = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ManifestError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let manifest = Manifest::from_slice(&raw).map_err(|source| ManifestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(entries = manifest.len(), "manifest loaded");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_document_order() {
        let manifest =
            Manifest::from_json(r#"{"z.txt": "1", "a/b.txt": "2", "m.txt": "3"}"#).expect("parse");
        let keys: Vec<&str> = manifest.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["z.txt", "a/b.txt", "m.txt"]);
    }

    #[test]
    fn keeps_non_string_values() {
        let manifest = Manifest::from_json(r#"{"n.txt": 42, "s.txt": "ok"}"#).expect("parse");
        assert_eq!(manifest.len(), 2);
        let first = manifest.entries().next().expect("first entry");
        assert_eq!(first, ("n.txt", &Value::from(42)));
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(Manifest::from_json(r#"["a.txt", "b.txt"]"#).is_err());
        assert!(Manifest::from_json(r#""a.txt""#).is_err());
    }

    #[test]
    fn load_missing_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_manifest(&temp.path().join(DEFAULT_MANIFEST_FILE)).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn load_malformed_is_decode_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_MANIFEST_FILE);
        fs::write(&path, "{\"a.txt\": ").expect("write manifest");
        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Decode { .. }));
    }

    #[test]
    fn load_invalid_utf8_is_decode_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_MANIFEST_FILE);
        fs::write(&path, b"{\"a.txt\": \"\xff\xfe\"}").expect("write manifest");
        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Decode { .. }));
    }

    #[test]
    fn load_empty_object() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_MANIFEST_FILE);
        fs::write(&path, "{}").expect("write manifest");
        let manifest = load_manifest(&path).expect("load");
        assert!(manifest.is_empty());
    }
}
