//! Human-readable console lines for a scaffold run.

use std::path::Path;

use crate::manifest::ManifestError;
use crate::scaffolder::{Progress, Summary};

pub const START_LINE: &str = "Starting to create project files and folders...";

/// Console line for a progress event. Skips are silent.
pub fn render_event(event: &Progress) -> Option<String> {
    match event {
        Progress::DirectoryCreated(dir) => Some(format!("Created directory: {}", dir.display())),
        Progress::FileWritten(key) => Some(format!("Successfully created: {key}")),
        Progress::Skipped(_) => None,
        Progress::Failed { key, error } => {
            Some(format!("Could not create file {key}. Error: {error}"))
        }
    }
}

/// Closing line, preceded by a blank line.
pub fn render_summary(summary: &Summary) -> String {
    let files = if summary.written == 1 { "file" } else { "files" };
    if summary.failed == 0 {
        format!(
            "\nProject setup complete! {} {files} created.",
            summary.written
        )
    } else {
        format!(
            "\nProject setup complete! {} {files} created, {} failed.",
            summary.written, summary.failed
        )
    }
}

/// Diagnostic printed when the manifest cannot be loaded.
pub fn render_fatal(err: &ManifestError) -> String {
    match err {
        ManifestError::NotFound { path } => {
            let in_cwd = path
                .parent()
                .is_none_or(|dir| dir.as_os_str().is_empty() || dir == Path::new("."));
            match path.file_name() {
                Some(name) if in_cwd => format!(
                    "Error: '{}' not found in the current directory.",
                    name.to_string_lossy()
                ),
                _ => format!("Error: '{}' not found.", path.display()),
            }
        }
        ManifestError::Read { path, source } => {
            format!("Error: Could not read '{}': {source}", path.display())
        }
        ManifestError::Decode { source, .. } => format!(
            "Error: Could not decode JSON. Make sure the file content is valid. ({source})"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn renders_progress_lines() {
        assert_eq!(
            render_event(&Progress::DirectoryCreated(PathBuf::from("src/a"))).as_deref(),
            Some("Created directory: src/a")
        );
        assert_eq!(
            render_event(&Progress::FileWritten("src/a/b.txt".to_string())).as_deref(),
            Some("Successfully created: src/a/b.txt")
        );
        assert_eq!(
            render_event(&Progress::Skipped("src/app/all-code.json".to_string())),
            None
        );
        assert_eq!(
            render_event(&Progress::Failed {
                key: "x".to_string(),
                error: "denied".to_string(),
            })
            .as_deref(),
            Some("Could not create file x. Error: denied")
        );
    }

    #[test]
    fn summary_mentions_failures_only_when_present() {
        let clean = Summary {
            written: 2,
            ..Summary::default()
        };
        assert_eq!(
            render_summary(&clean),
            "\nProject setup complete! 2 files created."
        );

        let partial = Summary {
            written: 1,
            failed: 3,
            ..Summary::default()
        };
        assert_eq!(
            render_summary(&partial),
            "\nProject setup complete! 1 file created, 3 failed."
        );
    }

    #[test]
    fn not_found_outside_cwd_shows_full_path() {
        let err = ManifestError::NotFound {
            path: PathBuf::from("exports/all-code.json"),
        };
        assert_eq!(render_fatal(&err), "Error: 'exports/all-code.json' not found.");
    }

    #[test]
    fn not_found_names_the_file() {
        let err = ManifestError::NotFound {
            path: PathBuf::from("./all-code.json"),
        };
        assert_eq!(
            render_fatal(&err),
            "Error: 'all-code.json' not found in the current directory."
        );
    }
}
