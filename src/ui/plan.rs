// Training plan tab rendering.

use ratatui::{prelude::*, widgets::*};

use crate::snapshot::AthleteSnapshot;

use super::widgets::{render_empty, titled_block};

/// Draw the weekly training plan.
pub fn draw_plan_tab(frame: &mut Frame, snapshot: &AthleteSnapshot, scroll: u16, area: Rect) {
    if snapshot.training_plan.is_empty() {
        render_empty(frame, area, "No training plan yet.");
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for week in &snapshot.training_plan {
        let number = week
            .week
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let start = week.start_date.as_deref().unwrap_or("N/A");

        lines.push(Line::from(Span::styled(
            format!("Week {} starting {}", number, start),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for session in &week.sessions {
            lines.push(Line::from(vec![
                Span::styled("  - ", Style::default().fg(Color::DarkGray)),
                Span::raw(session.as_str()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Weekly Training Plan"))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
