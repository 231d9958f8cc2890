//! Diagnostic tracing for the scaffold binary.
//!
//! Tracing never carries the run transcript: directory, file and failure lines
//! come from [`crate::report`] and print the same whatever `RUST_LOG` says. Set
//! `RUST_LOG=scaffold=debug` to see each entry's handling on stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a compact stderr subscriber without timestamps.
///
/// Later calls leave the first subscriber in place.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_first_subscriber() {
        init();
        init();
    }
}
