// Tab bar for the dashboard views.
// The Sync tab carries a badge with the unread warning/error count.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Title for `tab`, with the unread count appended to the Sync tab.
fn tab_label(tab: Tab, unread: usize) -> String {
    match tab {
        Tab::Sync if unread > 0 => format!("{} ({})", tab.title(), unread),
        _ => tab.title().to_string(),
    }
}

fn tab_style(tab: Tab, active: Tab, unread: usize) -> Style {
    if tab == active {
        return Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match tab {
        Tab::Sync if unread > 0 => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    }
}

pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let unread = app.console.unread;
    let titles = Tab::ALL.iter().map(|&tab| {
        Line::from(Span::styled(
            tab_label(tab, unread),
            tab_style(tab, app.active_tab, unread),
        ))
    });
    let selected = Tab::ALL
        .iter()
        .position(|&tab| tab == app.active_tab)
        .unwrap_or(0);

    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " tridash ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(
        Tabs::new(titles)
            .block(header)
            .select(selected)
            .divider(Span::raw(" │ ")),
        area,
    );
}
