//! Materialize a JSON file manifest onto disk.
//!
//! A manifest (`all-code.json`) maps relative file paths to file contents. The
//! scaffolder walks it once, creating missing directories and writing each
//! file, and keeps going when a single entry fails.
//!
//! - **[`manifest`]**: Loading and decoding the manifest document.
//! - **[`scaffolder`]**: The per-entry directory creation and file writes.
//! - **[`report`]**: Console lines for progress events and the final summary.
//!
//! [`config`] carries the run options and [`exit_codes`] the process contract
//! used by the `scaffold` binary.

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod scaffolder;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
