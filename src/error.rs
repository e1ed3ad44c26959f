// Error types for tridash.
// Covers remote metrics API failures, snapshot store I/O, and configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Metrics API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Metrics API returned HTTP {0}")]
    Status(u16),

    #[error("No metrics API endpoint configured (set METRICS_API_URL)")]
    MissingEndpoint,

    #[error("Missing METRICS_API_KEY for the configured endpoint")]
    MissingToken,

    #[error("{} not found. Create this file with athlete data in JSON format.", .0.display())]
    SnapshotMissing(PathBuf),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
