// Metrics tab rendering.
// One row of line charts per sport, scrolled a sport at a time.

use ratatui::{prelude::*, symbols, widgets::*};

use crate::snapshot::AthleteSnapshot;
use crate::state::metrics::{self, MetricSeries, SportMetrics};

use super::widgets::render_empty;

const SPORT_HEIGHT: u16 = 12;

/// Draw the per-sport metric charts.
pub fn draw_metrics_tab(frame: &mut Frame, snapshot: &AthleteSnapshot, scroll: u16, area: Rect) {
    let sports = metrics::sport_metrics(snapshot);
    if sports.is_empty() {
        render_empty(frame, area, "No training metrics collected yet.");
        return;
    }

    let first = (scroll as usize).min(sports.len() - 1);
    let visible = ((area.height / SPORT_HEIGHT).max(1) as usize).min(sports.len() - first);

    let mut constraints = vec![Constraint::Length(SPORT_HEIGHT); visible];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (sport, row) in sports[first..first + visible].iter().zip(rows.iter()) {
        draw_sport(frame, sport, *row);
    }
}

fn draw_sport(frame: &mut Frame, sport: &SportMetrics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        format!(" {} Metrics", sport.title()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    if sport.series.is_empty() {
        render_empty(frame, chunks[1], "No charted metrics for this sport.");
        return;
    }

    let count = sport.series.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); sport.series.len()])
        .split(chunks[1]);

    for (series, column) in sport.series.iter().zip(columns.iter()) {
        draw_series(frame, series, *column);
    }
}

fn draw_series(frame: &mut Frame, series: &MetricSeries, area: Rect) {
    let Some(&(start, _)) = series.points.first() else {
        return;
    };
    let end = series.points.last().map(|(d, _)| *d).unwrap_or(start);

    // x = days since the first point
    let data: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|(date, value)| ((*date - start).num_days() as f64, *value))
        .collect();

    let max_x = data.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
    let (min_y, max_y) = y_bounds(&data);

    let graph_type = if data.len() > 1 {
        GraphType::Line
    } else {
        GraphType::Scatter
    };
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(graph_type)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let axis_style = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(axis_style)
                .title(format!(" {} ", series.title)),
        )
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, max_x])
                .labels(vec![
                    start.format("%m-%d").to_string(),
                    end.format("%m-%d").to_string(),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([min_y, max_y])
                .labels(vec![format!("{:.0}", min_y), format!("{:.0}", max_y)]),
        );

    frame.render_widget(chart, area);
}

/// Value range padded so flat series stay visible.
fn y_bounds(data: &[(f64, f64)]) -> (f64, f64) {
    let min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_bounds() {
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
        assert_eq!(y_bounds(&[(0.0, 150.0)]), (149.0, 151.0));
        let (lo, hi) = y_bounds(&[(0.0, 100.0), (1.0, 200.0)]);
        assert_eq!((lo, hi), (90.0, 210.0));
    }
}
