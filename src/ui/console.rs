// Sync tab rendering.
// Shows sync freshness and the activity log, newest first.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::ConsoleLevel;

use super::widgets::format_relative_time;

/// Draw the Sync tab.
pub fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let last_synced = app
        .console
        .last_synced
        .map(|t| format_relative_time(&t))
        .unwrap_or_else(|| "never".to_string());
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" Snapshot: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.data.snapshot_path.display().to_string()),
        ]),
        Line::from(vec![
            Span::styled(" Last synced: ", Style::default().fg(Color::DarkGray)),
            Span::raw(last_synced),
        ]),
    ]);
    frame.render_widget(header, chunks[0]);

    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if app.console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, chunks[1]);
        return;
    }

    // Show newest messages first (reverse order)
    let items: Vec<ListItem> = app
        .console
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("❌", Color::Red),
                ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                ConsoleLevel::Info => ("ℹ️", Color::Cyan),
            };

            let time = format_relative_time(&msg.timestamp);

            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(time, Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, chunks[1], &mut app.console.list_state);
}
