//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Sends logs to `path` so they never draw over the terminal UI.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
