//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a file instead of
//! stdout/stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Routes tracing output to `log_path`, creating parent directories as
/// needed. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init(log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
