// Periodic refresh of the snapshot store.
// Fetches the remote document on an interval and atomically replaces the local file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc::UnboundedSender, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::error::{DashError, Result};
use crate::metrics::MetricsClient;
use crate::snapshot::store;

use super::SyncEvent;

/// Default interval between refreshes: 1 hour.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Fetches the remote document and replaces the snapshot store with it.
#[derive(Debug, Clone)]
pub struct RefreshJob {
    client: MetricsClient,
    snapshot_path: PathBuf,
    events: Option<UnboundedSender<SyncEvent>>,
}

impl RefreshJob {
    pub fn new(client: MetricsClient, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            snapshot_path: snapshot_path.into(),
            events: None,
        }
    }

    /// Publish an event for every run outcome.
    pub fn with_events(mut self, events: UnboundedSender<SyncEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn snapshot_path(&self) -> &PathBuf {
        &self.snapshot_path
    }

    /// Run one refresh.
    ///
    /// On any failure the snapshot store keeps its previous content. The
    /// outcome is published and the error returned; reporting it is left to
    /// the caller.
    pub async fn run_once(&self) -> Result<()> {
        match self.refresh().await {
            Ok(()) => {
                info!(path = %self.snapshot_path.display(), "synced from metrics API");
                self.publish(SyncEvent::synced());
                Ok(())
            }
            Err(DashError::Status(status)) => {
                self.publish(SyncEvent::failed(
                    Some(status),
                    format!("Sync failed: HTTP {}", status),
                ));
                Err(DashError::Status(status))
            }
            Err(e) => {
                self.publish(SyncEvent::failed(None, format!("Sync error: {}", e)));
                Err(e)
            }
        }
    }

    async fn refresh(&self) -> Result<()> {
        let document = self.client.fetch().await?;

        // fsync + rename are blocking
        let path = self.snapshot_path.clone();
        tokio::task::spawn_blocking(move || store::write_snapshot(&path, &document))
            .await
            .map_err(|e| DashError::Other(format!("snapshot writer failed: {}", e)))?
    }

    fn publish(&self, event: SyncEvent) {
        if let Some(events) = &self.events {
            // Receiver gone means the dashboard has exited.
            let _ = events.send(event);
        }
    }

    /// Run the job on a fixed interval until the returned handle is shut down.
    ///
    /// The first run happens immediately. Must be called within a tokio runtime.
    pub fn spawn(self, interval: Duration) -> RefreshHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let trigger = Arc::new(Notify::new());
        let notified = Arc::clone(&trigger);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = notified.notified() => ticker.reset(),
                    _ = stop_rx.changed() => break,
                }
                match self.run_once().await {
                    Ok(()) => {}
                    Err(DashError::Status(status)) => warn!(status, "sync failed"),
                    Err(e) => error!(error = %e, "sync error"),
                }
            }

            info!("refresh job stopped");
        });

        info!(interval_secs = interval.as_secs(), "refresh job started");

        RefreshHandle {
            stop: stop_tx,
            trigger,
            task,
        }
    }
}

/// Control handle for a spawned refresh job.
#[derive(Debug)]
pub struct RefreshHandle {
    stop: watch::Sender<bool>,
    trigger: Arc<Notify>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Request a refresh now, outside the schedule.
    pub fn trigger(&self) {
        self.trigger.notify_one();
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the job and wait for it to exit. A run already in flight completes first.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.task.await {
            warn!(error = %e, "refresh job did not exit cleanly");
        }
    }
}
