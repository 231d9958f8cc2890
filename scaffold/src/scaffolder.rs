//! Materialize manifest entries as files under an output root.
//!
//! One linear pass in manifest order. Every entry is isolated: a failure is
//! reported through [`Progress::Failed`] and the pass moves on. Nothing is
//! rolled back, so a run with failures leaves a partially populated tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ScaffoldConfig;
use crate::manifest::Manifest;

/// Something that happened while materializing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A missing parent directory was created (path as written in the key).
    DirectoryCreated(PathBuf),
    /// The entry's content was written.
    FileWritten(String),
    /// The entry is on the skip list.
    Skipped(String),
    /// Creating the directory or writing the file failed.
    Failed { key: String, error: String },
}

/// Totals for one pass over a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub directories_created: usize,
}

#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    skip: Vec<String>,
}

impl Scaffolder {
    /// Scaffolder writing under `root` that skips only the manifest's own entry.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip: ScaffoldConfig::default().skip,
        }
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self {
            root: config.root.clone(),
            skip: config.skip.clone(),
        }
    }

    /// Replace the skip list.
    pub fn with_skip(mut self, skip: Vec<String>) -> Self {
        self.skip = skip;
        self
    }

    /// Exact match against the skip list; no path normalization.
    pub fn is_skipped(&self, key: &str) -> bool {
        self.skip.iter().any(|skipped| skipped == key)
    }

    /// Write every entry of `manifest`, reporting each step to `on_event`.
    pub fn materialize(&self, manifest: &Manifest, mut on_event: impl FnMut(&Progress)) -> Summary {
        let mut summary = Summary::default();
        for (key, value) in manifest.entries() {
            if self.is_skipped(key) {
                debug!(key, "skipping entry");
                summary.skipped += 1;
                on_event(&Progress::Skipped(key.to_string()));
                continue;
            }
            match self.materialize_entry(key, value, &mut summary, &mut on_event) {
                Ok(()) => {
                    debug!(key, "entry written");
                    summary.written += 1;
                    on_event(&Progress::FileWritten(key.to_string()));
                }
                Err(err) => {
                    debug!(key, error = %format!("{err:#}"), "entry failed");
                    summary.failed += 1;
                    on_event(&Progress::Failed {
                        key: key.to_string(),
                        error: format!("{err:#}"),
                    });
                }
            }
        }
        debug!(?summary, "manifest materialized");
        summary
    }

    fn materialize_entry(
        &self,
        key: &str,
        value: &Value,
        summary: &mut Summary,
        on_event: &mut impl FnMut(&Progress),
    ) -> Result<()> {
        if let Some(dir) = ensure_parent_dir(&self.root, key)? {
            summary.directories_created += 1;
            on_event(&Progress::DirectoryCreated(dir));
        }
        write_entry(&self.root, key, value)
    }
}

/// Create the directory portion of `key` under `root` if it is missing.
///
/// Returns the created directory as written in the key, or `None` when the key
/// has no directory portion or it already exists.
pub fn ensure_parent_dir(root: &Path, key: &str) -> Result<Option<PathBuf>> {
    let Some(dir) = Path::new(key)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
    else {
        return Ok(None);
    };
    let target = root.join(dir);
    if target.exists() {
        return Ok(None);
    }
    fs::create_dir_all(&target).with_context(|| format!("create directory {}", dir.display()))?;
    debug!(dir = %dir.display(), "directory created");
    Ok(Some(dir.to_path_buf()))
}

/// Write `value` verbatim as UTF-8 text to `root/key`, truncating any existing file.
pub fn write_entry(root: &Path, key: &str, value: &Value) -> Result<()> {
    let Value::String(content) = value else {
        bail!("content must be a JSON string, found {}", json_kind(value));
    };
    let target = root.join(key);
    fs::write(&target, content).with_context(|| format!("write {}", target.display()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
