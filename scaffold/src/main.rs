//! Recreate a project tree from an exported `all-code.json` manifest.
//!
//! Reads `./all-code.json` (a JSON object of relative path to file contents),
//! creates missing directories, and writes every file except the manifest's
//! own `src/app/all-code.json` entry.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use scaffold::config::ScaffoldConfig;
use scaffold::manifest::{DEFAULT_MANIFEST_FILE, load_manifest};
use scaffold::report::{START_LINE, render_event, render_fatal, render_summary};
use scaffold::scaffolder::{Progress, Scaffolder};
use scaffold::{exit_codes, logging};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Materialize a JSON file manifest onto disk"
)]
struct Cli {
    /// Manifest mapping relative paths to file contents.
    #[arg(long, default_value = DEFAULT_MANIFEST_FILE)]
    manifest: PathBuf,

    /// Directory the manifest paths are written under.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Manifest key to leave unwritten. Repeatable; replaces the default
    /// `src/app/all-code.json`.
    #[arg(long = "skip", value_name = "KEY")]
    skip: Vec<String>,
}

impl Cli {
    fn into_config(self) -> ScaffoldConfig {
        let defaults = ScaffoldConfig::default();
        let skip = if self.skip.is_empty() {
            defaults.skip
        } else {
            self.skip
        };
        ScaffoldConfig {
            manifest_path: self.manifest,
            root: self.root,
            skip,
        }
    }
}

fn main() {
    logging::init();
    let config = Cli::parse().into_config();
    if let Err(err) = run(&config) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FATAL);
    }
}

fn run(config: &ScaffoldConfig) -> Result<()> {
    config.validate()?;
    let manifest = load_manifest(&config.manifest_path).map_err(|err| {
        info!(error = %err, "manifest rejected");
        anyhow!(render_fatal(&err))
    })?;

    if !config.root.exists() {
        fs::create_dir_all(&config.root)
            .with_context(|| format!("create output root {}", config.root.display()))?;
    }

    println!("{START_LINE}");
    let scaffolder = Scaffolder::from_config(config);
    let summary = scaffolder.materialize(&manifest, |event| match render_event(event) {
        Some(line) if matches!(event, Progress::Failed { .. }) => eprintln!("{line}"),
        Some(line) => println!("{line}"),
        None => {}
    });
    info!(
        summary = %serde_json::to_string(&summary).context("serialize summary")?,
        "scaffold finished"
    );
    println!("{}", render_summary(&summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let config = Cli::parse_from(["scaffold"]).into_config();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn parse_repeated_skip_replaces_default() {
        let config = Cli::parse_from([
            "scaffold",
            "--skip",
            "a.txt",
            "--skip",
            "b/c.txt",
            "--root",
            "out",
        ])
        .into_config();
        assert_eq!(config.skip, vec!["a.txt", "b/c.txt"]);
        assert_eq!(config.root, PathBuf::from("out"));
        assert_eq!(config.manifest_path, PathBuf::from("all-code.json"));
    }

    #[test]
    fn parse_without_skip_uses_config_default() {
        let config = Cli::parse_from(["scaffold", "--root", "out"]).into_config();
        assert_eq!(config.skip, ScaffoldConfig::default().skip);
    }
}
