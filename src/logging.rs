// Logging setup.
// Headless commands log to stderr; the dashboard logs to a file so the terminal stays clean.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{DashError, Result};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_stderr() -> Result<()> {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| DashError::Other(format!("failed to install logger: {}", e)))
}

/// Append logs to `path`, creating it if needed.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| DashError::Other(format!("failed to install logger: {}", e)))
}
