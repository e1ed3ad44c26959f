// Snapshot path utilities.
// Resolves default file locations in the platform data directory.

use std::path::PathBuf;

use directories::ProjectDirs;

pub const SNAPSHOT_FILE: &str = "athlete_data.json";
pub const HISTORY_FILE: &str = "training_history.json";
pub const LOG_FILE: &str = "tridash.log";

/// Get the base data directory (~/.local/share/tridash on Linux).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tridash").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Default path of the snapshot store.
/// Falls back to the working directory when no home directory is known.
pub fn default_snapshot_path() -> PathBuf {
    in_data_dir(SNAPSHOT_FILE)
}

/// Default path of the training history file.
pub fn default_history_path() -> PathBuf {
    in_data_dir(HISTORY_FILE)
}

/// Path of the dashboard log file.
pub fn log_path() -> PathBuf {
    in_data_dir(LOG_FILE)
}

fn in_data_dir(file: &str) -> PathBuf {
    data_dir()
        .map(|dir| dir.join(file))
        .unwrap_or_else(|| PathBuf::from(file))
}
