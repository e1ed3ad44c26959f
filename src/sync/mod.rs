// Background sync module.
// Keeps the snapshot store fresh and offers a memoized read path to the remote API.

pub mod cached;
pub mod refresh;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::snapshot::AthleteSnapshot;

pub use cached::{CachedAccessor, CachedData, DEFAULT_TTL};
pub use refresh::{DEFAULT_INTERVAL, RefreshHandle, RefreshJob};

/// Outcome notifications published to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// The snapshot store was replaced with a fresh document.
    Synced { at: DateTime<Utc> },
    /// A refresh attempt failed; the snapshot store was left untouched.
    Failed {
        at: DateTime<Utc>,
        status: Option<u16>,
        reason: String,
    },
    /// Result of a peek through the cached accessor.
    Peeked {
        at: DateTime<Utc>,
        summary: Option<String>,
    },
}

impl SyncEvent {
    pub fn synced() -> Self {
        SyncEvent::Synced { at: Utc::now() }
    }

    pub fn failed(status: Option<u16>, reason: impl Into<String>) -> Self {
        SyncEvent::Failed {
            at: Utc::now(),
            status,
            reason: reason.into(),
        }
    }

    pub fn peeked(summary: Option<String>) -> Self {
        SyncEvent::Peeked {
            at: Utc::now(),
            summary,
        }
    }
}

/// One-line description of a remote document.
pub fn peek_summary(document: &Value) -> String {
    match serde_json::from_value::<AthleteSnapshot>(document.clone()) {
        Ok(snapshot) => format!(
            "{} sessions across {} dates, {} planned weeks",
            snapshot.session_count(),
            snapshot.metrics_collected.len(),
            snapshot.training_plan.len()
        ),
        Err(_) => match document.as_object() {
            Some(map) => format!("unrecognised document with {} fields", map.len()),
            None => "unrecognised document".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_peek_summary() {
        let doc = json!({
            "training_plan": [{"week": 1, "sessions": []}],
            "metrics_collected": {"2024-06-01": [{"sport": "run"}, {"sport": "bike"}]}
        });
        assert_eq!(
            peek_summary(&doc),
            "2 sessions across 1 dates, 1 planned weeks"
        );
    }

    #[test]
    fn test_peek_summary_unrecognised() {
        assert_eq!(
            peek_summary(&json!({"training_plan": "soon", "x": 1})),
            "unrecognised document with 2 fields"
        );
        assert_eq!(peek_summary(&json!([1, 2])), "unrecognised document");
    }
}
