// UI module for rendering the TUI.
// Contains the tab bar, one view per tab, the status bar, and the help overlay.

mod console;
mod history;
mod home;
mod metrics;
mod plan;
mod tabs;
mod widgets;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::snapshot::AthleteSnapshot;
use crate::state::LoadingState;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Sync => console::draw_console_tab(frame, app, area),
        Tab::History => history::draw_history_tab(frame, app, area),
        tab => match &app.data.snapshot {
            LoadingState::Idle => widgets::render_loading(frame, area, "Loading snapshot"),
            LoadingState::Error(e) => widgets::render_error(frame, area, e),
            LoadingState::Loaded(snapshot) => {
                draw_snapshot_tab(frame, tab, snapshot, app.scroll, area)
            }
        },
    }
}

/// Draw a tab that renders straight from the loaded snapshot.
fn draw_snapshot_tab(
    frame: &mut Frame,
    tab: Tab,
    snapshot: &AthleteSnapshot,
    scroll: u16,
    area: Rect,
) {
    match tab {
        Tab::Home => home::draw_home_tab(frame, snapshot, area),
        Tab::Plan => plan::draw_plan_tab(frame, snapshot, scroll, area),
        Tab::Metrics => metrics::draw_metrics_tab(frame, snapshot, scroll, area),
        Tab::History | Tab::Sync => {}
    }
}

/// Draw the status bar with keybinding hints and sync freshness.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↑↓ "),
        Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  p "),
        Span::styled("Peek", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let (sync_text, sync_color) = if !app.has_remote() {
        ("offline".to_string(), Color::DarkGray)
    } else {
        match (app.console.last_synced, app.console.last_failure) {
            (Some(ok), Some(failed)) if failed > ok => (
                format!("sync failing, last ok {}", widgets::format_relative_time(&ok)),
                Color::Yellow,
            ),
            (Some(ok), _) => (
                format!("synced {}", widgets::format_relative_time(&ok)),
                Color::DarkGray,
            ),
            (None, Some(_)) => ("sync failing".to_string(), Color::Red),
            (None, None) => ("syncing...".to_string(), Color::DarkGray),
        }
    };
    hints.push(Span::styled(
        format!("  {}", sync_text),
        Style::default().fg(sync_color),
    ));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 50.min(area.width);
    let popup_height = 14.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let keys = [
        ("  Tab/S-Tab     ", "Switch views"),
        ("  ↑/↓ or j/k    ", "Scroll / select"),
        ("  r             ", "Reload files and sync now"),
        ("  p             ", "Peek remote metrics (cached)"),
        ("  ?             ", "Show/hide this help"),
        ("  q             ", "Quit"),
    ];

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];
    help_text.extend(keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(*key, Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ])
    }));
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
