// Memoized access to the remote metrics API.
// Single-slot cache with a fixed time-to-live; failures are never cached.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::metrics::MetricsClient;

/// Default TTL for the cached document: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// On-demand read of the remote document, memoized for `ttl`.
///
/// Callers are serialized on the slot, so concurrent misses share one request.
#[derive(Debug)]
pub struct CachedAccessor {
    client: MetricsClient,
    ttl: Duration,
    slot: Mutex<Option<CachedData<Value>>>,
}

impl CachedAccessor {
    pub fn new(client: MetricsClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the remote document, or `None` if it could not be fetched.
    pub async fn get(&self) -> Option<Value> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.is_valid(self.ttl) {
                debug!(cached_at = %cached.cached_at, "metrics cache hit");
                return Some(cached.data.clone());
            }
        }

        match self.client.fetch().await {
            Ok(document) => {
                *slot = Some(CachedData::new(document.clone()));
                Some(document)
            }
            Err(e) => {
                warn!(error = %e, "metrics API fetch failed");
                None
            }
        }
    }

    /// When the held value was fetched, if one is held and still fresh.
    pub async fn fresh_since(&self) -> Option<DateTime<Utc>> {
        self.slot
            .lock()
            .await
            .as_ref()
            .filter(|cached| cached.is_valid(self.ttl))
            .map(|cached| cached.cached_at)
    }

    /// Whether a fresh value is held.
    pub async fn is_fresh(&self) -> bool {
        self.fresh_since().await.is_some()
    }
}
