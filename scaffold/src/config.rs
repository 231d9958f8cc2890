//! Options for a scaffold run.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::manifest::{DEFAULT_MANIFEST_FILE, SELF_ENTRY};

/// Where to read the manifest, where to write, and which keys to leave out.
///
/// The defaults reproduce the plain `scaffold` invocation: `./all-code.json`
/// materialized into `.`, skipping the manifest's own entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Manifest document to load.
    pub manifest_path: PathBuf,

    /// Directory manifest keys are resolved against.
    pub root: PathBuf,

    /// Manifest keys that are never written.
    pub skip: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_FILE),
            root: PathBuf::from("."),
            skip: vec![SELF_ENTRY.to_string()],
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.manifest_path.as_os_str().is_empty() {
            return Err(anyhow!("manifest path must not be empty"));
        }
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!("output root must not be empty"));
        }
        if self.root.exists() && !self.root.is_dir() {
            return Err(anyhow!(
                "output root {} exists but is not a directory",
                self.root.display()
            ));
        }
        if self.skip.iter().any(|key| key.trim().is_empty()) {
            return Err(anyhow!("skip keys must be non-empty"));
        }
        Ok(())
    }
}
