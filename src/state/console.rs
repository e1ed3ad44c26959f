// Sync console state.
// Activity log of refresh outcomes and remote peeks, with unread tracking.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

use crate::sync::SyncEvent;

/// Oldest messages are dropped past this many.
pub const MAX_MESSAGES: usize = 500;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn new(level: ConsoleLevel, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp,
        }
    }
}

/// State for the Sync tab.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Oldest first.
    pub messages: VecDeque<ConsoleMessage>,
    pub list_state: ListState,
    /// Warnings and errors not yet seen on the Sync tab.
    pub unread: usize,
    pub last_synced: Option<DateTime<Utc>>,
    pub last_failure: Option<DateTime<Utc>>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sync event as a console line.
    pub fn record(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::Synced { at } => {
                self.last_synced = Some(*at);
                self.push(ConsoleMessage::new(
                    ConsoleLevel::Info,
                    "Synced from metrics API",
                    *at,
                ));
            }
            SyncEvent::Failed { at, reason, .. } => {
                self.last_failure = Some(*at);
                self.push(ConsoleMessage::new(ConsoleLevel::Error, reason.clone(), *at));
            }
            SyncEvent::Peeked { at, summary } => match summary {
                Some(summary) => self.push(ConsoleMessage::new(
                    ConsoleLevel::Info,
                    format!("Remote: {}", summary),
                    *at,
                )),
                None => self.push(ConsoleMessage::new(
                    ConsoleLevel::Warn,
                    "Remote peek returned no data",
                    *at,
                )),
            },
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::new(ConsoleLevel::Info, message, Utc::now()));
    }

    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::new(ConsoleLevel::Warn, message, Utc::now()));
    }

    fn push(&mut self, message: ConsoleMessage) {
        if message.level != ConsoleLevel::Info {
            self.unread += 1;
        }
        self.messages.push_back(message);
        if self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }

        // Newest is drawn first. Follow it only when already there, otherwise
        // keep the same message selected.
        let selected = match self.list_state.selected() {
            None | Some(0) => 0,
            Some(i) => (i + 1).min(self.messages.len() - 1),
        };
        self.list_state.select(Some(selected));
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Select previous (newer) message in list.
    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    /// Select next (older) message in list.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let last = self.messages.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) if i < last => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
