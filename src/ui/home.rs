// Home tab rendering.
// Today's session, athlete score, session summary, and quick status cards.

use ratatui::{prelude::*, widgets::*};

use crate::snapshot::AthleteSnapshot;
use crate::state::home::{self, QuickStat, TodaySummary};

use super::widgets::titled_block;

/// Draw the home overview.
pub fn draw_home_tab(frame: &mut Frame, snapshot: &AthleteSnapshot, area: Rect) {
    let today = TodaySummary::from_snapshot(snapshot);
    let stats = home::quick_stats(snapshot);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Today's session
            Constraint::Length(3), // Athlete score
            Constraint::Length(4), // Session summary
            Constraint::Length(1), // Quick status heading
            Constraint::Length(3), // Weight, HR, body fat
            Constraint::Length(3), // VO2 max, athlete
            Constraint::Min(0),
        ])
        .split(area);

    let session_style = if today.is_rest_day() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let session = Paragraph::new(Span::styled(today.session.clone(), session_style))
        .block(titled_block("Today's Session"));
    frame.render_widget(session, rows[0]);

    let score = Paragraph::new(Span::styled(
        home::athlete_score(snapshot),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(titled_block("Athlete Score"));
    frame.render_widget(score, rows[1]);

    draw_session_summary(frame, &today, rows[2]);

    let heading = Paragraph::new(Span::styled(
        " Quick Status",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, rows[3]);

    let (first, second) = stats.split_at(stats.len().min(3));
    draw_stat_row(frame, first, rows[4]);
    draw_stat_row(frame, second, rows[5]);
}

fn draw_session_summary(frame: &mut Frame, today: &TodaySummary, area: Rect) {
    let block = titled_block("Session Summary");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let items = [
        ("Status", today.status),
        ("Duration", today.duration),
        ("Effort", today.effort),
    ];
    for ((label, value), column) in items.iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(
                *value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            *column,
        );
    }
}

fn draw_stat_row(frame: &mut Frame, stats: &[QuickStat], area: Rect) {
    if stats.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(area);

    for (stat, column) in stats.iter().zip(columns.iter()) {
        let card = Paragraph::new(stat.value.as_str())
            .alignment(Alignment::Center)
            .block(titled_block(stat.label));
        frame.render_widget(card, *column);
    }
}
