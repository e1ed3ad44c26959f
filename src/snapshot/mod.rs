// Snapshot store module.
// Persists the last successfully fetched athlete document and reads it back for display.

pub mod paths;
pub mod store;
pub mod types;

pub use paths::{default_history_path, default_snapshot_path, log_path};
pub use store::{read_history, read_snapshot, write_snapshot};
pub use types::{AthleteSnapshot, HistoryEntry, Profile, SessionRecord, TrainingWeek};
