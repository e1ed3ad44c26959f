// Dashboard data state.
// Loads the snapshot store and history file and holds them for the views.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::snapshot::{self, AthleteSnapshot, HistoryEntry};

/// Loading state for file-backed data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Data shown by the Home, Plan, Metrics and History tabs.
#[derive(Debug)]
pub struct DashboardData {
    pub snapshot_path: PathBuf,
    pub history_path: PathBuf,
    pub snapshot: LoadingState<AthleteSnapshot>,
    /// `Loaded(None)` when the history file does not exist.
    pub history: LoadingState<Option<Vec<HistoryEntry>>>,
}

impl DashboardData {
    pub fn new(snapshot_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            history_path: history_path.into(),
            snapshot: LoadingState::Idle,
            history: LoadingState::Idle,
        }
    }

    /// Re-read both files from disk.
    pub fn reload(&mut self) {
        self.reload_snapshot();
        self.reload_history();
    }

    pub fn reload_snapshot(&mut self) {
        self.snapshot = load(&self.snapshot_path, snapshot::read_snapshot);
    }

    pub fn reload_history(&mut self) {
        self.history = load(&self.history_path, snapshot::read_history);
    }
}

fn load<T, F>(path: &Path, read: F) -> LoadingState<T>
where
    F: FnOnce(&Path) -> crate::error::Result<T>,
{
    match read(path) {
        Ok(data) => {
            debug!(path = %path.display(), "loaded");
            LoadingState::Loaded(data)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load");
            LoadingState::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = DashboardData::new(
            temp_dir.path().join("athlete_data.json"),
            temp_dir.path().join("training_history.json"),
        );
        data.reload();

        match &data.snapshot {
            LoadingState::Error(msg) => assert!(msg.contains("athlete_data.json not found")),
            other => panic!("expected error, got {:?}", other),
        }
        assert!(matches!(data.history, LoadingState::Loaded(None)));
    }

    #[test]
    fn test_reload_picks_up_new_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");
        fs::write(&path, r#"{"training_plan": []}"#).unwrap();

        let mut data = DashboardData::new(&path, temp_dir.path().join("history.json"));
        data.reload_snapshot();
        assert!(data.snapshot.data().unwrap().training_plan.is_empty());

        fs::write(&path, r#"{"profile": {"name": "Sam"}}"#).unwrap();
        data.reload_snapshot();
        let snapshot = data.snapshot.data().unwrap();
        assert_eq!(snapshot.profile.name.as_deref(), Some("Sam"));
    }
}
