// tridash: triathlon training dashboard.
// Keeps a local athlete snapshot in sync with a remote metrics API and renders it in the terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod snapshot;
pub mod state;
pub mod sync;
pub mod ui;

pub use config::Config;
pub use error::{DashError, Result};
pub use metrics::MetricsClient;
pub use sync::{CachedAccessor, RefreshHandle, RefreshJob, SyncEvent};
