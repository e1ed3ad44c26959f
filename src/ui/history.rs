// History tab rendering.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::LoadingState;

use super::widgets::{render_empty, render_error, render_loading, titled_block};

/// Draw the athlete history log.
pub fn draw_history_tab(frame: &mut Frame, app: &App, area: Rect) {
    let entries = match &app.data.history {
        LoadingState::Idle => return render_loading(frame, area, "Loading history"),
        LoadingState::Error(e) => return render_error(frame, area, e),
        LoadingState::Loaded(None) => {
            let message = format!(
                "No history data found at {}.",
                app.data.history_path.display()
            );
            return render_empty(frame, area, &message);
        }
        LoadingState::Loaded(Some(entries)) => entries,
    };

    if entries.is_empty() {
        render_empty(frame, area, "No history entries.");
        return;
    }

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.date.as_deref().unwrap_or("N/A"),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" - "),
                Span::styled(
                    entry.summary.as_deref().unwrap_or("N/A"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Athlete History"))
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}
