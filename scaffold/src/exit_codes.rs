//! Stable exit codes for the scaffold CLI.

/// Manifest was processed. Individual entries may still have failed.
pub const OK: i32 = 0;
/// Manifest missing or undecodable, or invalid options. Nothing was written.
pub const FATAL: i32 = 1;
