// Command-line interface.
// Subcommands for the dashboard, the headless sync daemon, and one-shot fetches.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::metrics::client::DEFAULT_TIMEOUT;
use crate::sync::{DEFAULT_INTERVAL, DEFAULT_TTL};

#[derive(Debug, Parser)]
#[command(
    name = "tridash",
    version,
    about = "Triathlon training dashboard synced from a remote metrics API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the terminal dashboard (default)
    Dashboard,
    /// Keep the snapshot store in sync until interrupted
    Sync,
    /// Refresh the snapshot store once and exit
    Fetch,
    /// Print the remote document without touching the snapshot store
    Peek,
}

/// Settings shared by every subcommand. Each flag falls back to an env var.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Metrics API endpoint URL
    #[arg(long, env = "METRICS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer credential for the metrics API
    #[arg(long, env = "METRICS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Snapshot store path
    #[arg(long = "snapshot", env = "TRIDASH_SNAPSHOT_PATH", global = true)]
    pub snapshot_path: Option<PathBuf>,

    /// Training history file path
    #[arg(long = "history", env = "TRIDASH_HISTORY_PATH", global = true)]
    pub history_path: Option<PathBuf>,

    /// Seconds between snapshot refreshes
    #[arg(
        long,
        env = "TRIDASH_REFRESH_SECS",
        default_value_t = DEFAULT_INTERVAL.as_secs(),
        global = true
    )]
    pub refresh_secs: u64,

    /// Seconds a peeked document stays cached
    #[arg(
        long,
        env = "TRIDASH_CACHE_TTL_SECS",
        default_value_t = DEFAULT_TTL.as_secs(),
        global = true
    )]
    pub cache_ttl_secs: u64,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        env = "TRIDASH_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        global = true
    )]
    pub timeout_secs: u64,
}
