// App state and main event loop.
// Manages tabs, sync events from the background job, and keyboard input handling.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::state::{ConsoleState, DashboardData};
use crate::sync::{CachedAccessor, RefreshHandle, SyncEvent, peek_summary};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Plan,
    Metrics,
    History,
    Sync,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Plan, Tab::Metrics, Tab::History, Tab::Sync];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Plan => "Training Plan",
            Tab::Metrics => "Metrics",
            Tab::History => "History",
            Tab::Sync => "Sync",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Snapshot and history loaded from disk.
    pub data: DashboardData,
    /// Sync activity log.
    pub console: ConsoleState,
    /// Vertical scroll offset for text views.
    pub scroll: u16,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    runtime: Handle,
    refresh: Option<RefreshHandle>,
    accessor: Option<Arc<CachedAccessor>>,
    events_tx: UnboundedSender<SyncEvent>,
    events_rx: UnboundedReceiver<SyncEvent>,
}

impl App {
    pub fn new(data: DashboardData, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            active_tab: Tab::default(),
            data,
            console: ConsoleState::new(),
            scroll: 0,
            show_help: false,
            should_quit: false,
            runtime,
            refresh: None,
            accessor: None,
            events_tx,
            events_rx,
        }
    }

    /// Sender the refresh job should publish its outcomes on.
    pub fn events(&self) -> UnboundedSender<SyncEvent> {
        self.events_tx.clone()
    }

    /// Attach the background refresh job and the remote accessor.
    pub fn with_remote(mut self, refresh: RefreshHandle, accessor: Arc<CachedAccessor>) -> Self {
        self.refresh = Some(refresh);
        self.accessor = Some(accessor);
        self
    }

    /// Whether a remote endpoint is attached.
    pub fn has_remote(&self) -> bool {
        self.refresh.is_some()
    }

    /// Hand the refresh job back for shutdown.
    pub fn take_refresh(&mut self) -> Option<RefreshHandle> {
        self.refresh.take()
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.data.reload();
        if !self.has_remote() {
            self.console
                .log_warn("No metrics API configured; showing local snapshot only");
        }

        while !self.should_quit {
            self.drain_events();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply sync outcomes published since the last frame.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(&event);
        }
    }

    fn apply_event(&mut self, event: &SyncEvent) {
        debug!(?event, "sync event");
        if matches!(event, SyncEvent::Synced { .. }) {
            self.data.reload_snapshot();
        }
        self.console.record(event);
        self.clear_console_badge_if_viewing();
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            KeyCode::Char('r') => self.refresh_now(),
            KeyCode::Char('p') => self.peek_remote(),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.active_tab == Tab::Sync {
                    self.console.select_prev();
                } else {
                    self.scroll = self.scroll.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.active_tab == Tab::Sync {
                    self.console.select_next();
                } else {
                    self.scroll = self.scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.scroll = 0;
        self.clear_console_badge_if_viewing();
    }

    /// Reload local files and ask the background job for an immediate refresh.
    fn refresh_now(&mut self) {
        self.data.reload();
        match &self.refresh {
            Some(refresh) => {
                refresh.trigger();
                self.console.log_info("Refresh requested");
            }
            None => self.console.log_info("Reloaded local snapshot"),
        }
    }

    /// Fetch the remote document through the cached accessor without touching the store.
    fn peek_remote(&mut self) {
        let Some(accessor) = self.accessor.clone() else {
            self.console.log_warn("No metrics API configured");
            return;
        };

        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let summary = accessor.get().await.map(|doc| peek_summary(&doc));
            let _ = events.send(SyncEvent::peeked(summary));
        });
    }

    /// Clear console badge when viewing the Sync tab.
    fn clear_console_badge_if_viewing(&mut self) {
        if self.active_tab == Tab::Sync {
            self.console.mark_read();
        }
    }
}
