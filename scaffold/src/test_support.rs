//! Test-only helpers: temporary working directories and in-memory manifests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::manifest::{DEFAULT_MANIFEST_FILE, Manifest};

/// Build a manifest from `(key, content)` pairs, keeping their order.
pub fn manifest(entries: &[(&str, &str)]) -> Manifest {
    entries
        .iter()
        .map(|(key, content)| (key.to_string(), content.to_string()))
        .collect()
}

/// An empty temporary directory used as a scaffold working directory.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write raw manifest text to `all-code.json` in the workspace.
    pub fn write_manifest(&self, raw: &str) -> Result<PathBuf> {
        let path = self.path().join(DEFAULT_MANIFEST_FILE);
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Read a workspace file as UTF-8. Panics if missing.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path().join(rel);
        fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
    }

    /// All regular files under the workspace as sorted `/`-separated paths.
    pub fn files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(self.path(), self.path(), &mut files);
        files.sort();
        files
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("read {}: {err}", dir.display()));
    for entry in entries {
        let path = entry.expect("read entry").path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).expect("path under root");
            let parts: Vec<String> = rel
                .components()
                .map(|part| part.as_os_str().to_string_lossy().into_owned())
                .collect();
            out.push(parts.join("/"));
        }
    }
}
