// Snapshot store for reading and writing the athlete document.
// Handles pretty JSON serialization, atomic replacement, and typed loading.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{DashError, Result};

use super::types::{AthleteSnapshot, HistoryEntry};

/// Replace the snapshot store with `document`, pretty-printed.
///
/// The file is written to a sibling temp file, synced, then renamed over the
/// target, so readers see either the previous document or the new one.
pub fn write_snapshot(path: &Path, document: &Value) -> Result<()> {
    write_json_atomic(path, document)
}

/// Load the snapshot store into its typed form.
pub fn read_snapshot(path: &Path) -> Result<AthleteSnapshot> {
    read_json(path)?.ok_or_else(|| DashError::SnapshotMissing(path.to_path_buf()))
}

/// Load the training history file, or `None` if it does not exist.
pub fn read_history(path: &Path) -> Result<Option<Vec<HistoryEntry>>> {
    read_json(path)
}

/// Read JSON data from a file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let data = serde_json::from_str(&contents)?;
    Ok(Some(data))
}

/// Write data as pretty JSON via temp file + rename.
///
/// Each call gets its own temp file in the target directory, so concurrent
/// writers never share one. The temp file is removed if any step fails.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let json = serde_json::to_string_pretty(data)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");

        let document = json!({
            "profile": {"name": "Sam", "vo2max": 58},
            "training_plan": [],
        });
        write_snapshot(&path, &document).unwrap();

        let raw: Value = read_json(&path).unwrap().unwrap();
        assert_eq!(raw, document);

        let snapshot = read_snapshot(&path).unwrap();
        assert_eq!(snapshot.profile.name.as_deref(), Some("Sam"));
        assert_eq!(snapshot.profile.vo2max, Some(58.0));
    }

    #[test]
    fn test_write_is_pretty_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");

        write_snapshot(&path, &json!({"metrics": "sample"})).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"metrics\": \"sample\""));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_concurrent_writers_never_tear() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");

        let documents: Vec<Value> = ["a", "b"]
            .iter()
            .map(|tag| {
                let sessions: Vec<Value> = (0..5_000)
                    .map(|i| json!({"sport": tag, "metrics": {"duration_min": i}}))
                    .collect();
                json!({"metrics_collected": {"2024-06-01": sessions}})
            })
            .collect();

        std::thread::scope(|scope| {
            for document in &documents {
                let path = &path;
                scope.spawn(move || {
                    for _ in 0..20 {
                        write_snapshot(path, document).unwrap();
                    }
                });
            }
        });

        let raw: Value = read_json(&path).unwrap().unwrap();
        assert!(documents.contains(&raw));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a directory fails.
        let path = temp_dir.path().join("athlete_data.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(write_snapshot(&path, &json!({"c": 3})).is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");

        write_snapshot(&path, &json!({"a": 1, "b": 2})).unwrap();
        write_snapshot(&path, &json!({"c": 3})).unwrap();

        let raw: Value = read_json(&path).unwrap().unwrap();
        assert_eq!(raw, json!({"c": 3}));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/athlete_data.json");

        write_snapshot(&path, &json!({})).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, DashError::SnapshotMissing(_)));
        assert!(err.to_string().contains("nonexistent.json not found"));

        assert!(read_history(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_malformed_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete_data.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_snapshot(&path), Err(DashError::Json(_))));
    }

    #[test]
    fn test_read_history() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("training_history.json");
        fs::write(
            &path,
            r#"[{"date": "2024-05-01", "summary": "Sprint tri"}, {"summary": "Base block"}]"#,
        )
        .unwrap();

        let history = read_history(&path).unwrap().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date.as_deref(), Some("2024-05-01"));
        assert!(history[1].date.is_none());
    }
}
