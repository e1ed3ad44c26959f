// Metrics view state.
// Flattens per-date session records into rows and groups them into per-sport series.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use tracing::warn;

use crate::snapshot::AthleteSnapshot;

/// Metrics charted per sport, with their chart titles.
pub const CHARTED_METRICS: [(&str, &str); 3] = [
    ("duration_min", "Duration (min)"),
    ("avg_hr", "Avg HR (bpm)"),
    ("power", "Power (W)"),
];

const UNKNOWN_SPORT: &str = "unknown";

/// One recorded session, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub date: NaiveDate,
    pub sport: String,
    pub metrics: BTreeMap<String, f64>,
}

/// A single metric over time.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub key: &'static str,
    pub title: &'static str,
    /// Points sorted by date.
    pub points: Vec<(NaiveDate, f64)>,
}

/// All charted series for one sport.
#[derive(Debug, Clone, PartialEq)]
pub struct SportMetrics {
    pub sport: String,
    pub series: Vec<MetricSeries>,
}

impl SportMetrics {
    /// Sport name for headings, e.g. "bike" -> "Bike".
    pub fn title(&self) -> String {
        title_case(&self.sport)
    }
}

/// Flatten `metrics_collected` into rows. Entries with unparseable dates are skipped.
pub fn flatten(snapshot: &AthleteSnapshot) -> Vec<MetricRow> {
    let mut rows = Vec::new();

    for (date, sessions) in &snapshot.metrics_collected {
        let Some(parsed) = parse_date(date) else {
            warn!(date = %date, "skipping metrics with unparseable date");
            continue;
        };

        for session in sessions {
            rows.push(MetricRow {
                date: parsed,
                sport: session
                    .sport
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_SPORT.to_string()),
                metrics: session.metrics.clone(),
            });
        }
    }

    rows
}

/// Group rows per sport in first-seen order. Only metrics a sport actually
/// recorded get a series.
pub fn sport_metrics(snapshot: &AthleteSnapshot) -> Vec<SportMetrics> {
    let rows = flatten(snapshot);

    let mut sports: Vec<String> = Vec::new();
    for row in &rows {
        if !sports.contains(&row.sport) {
            sports.push(row.sport.clone());
        }
    }

    sports
        .into_iter()
        .map(|sport| {
            let series = CHARTED_METRICS
                .iter()
                .filter_map(|&(key, title)| {
                    let mut points: Vec<(NaiveDate, f64)> = rows
                        .iter()
                        .filter(|row| row.sport == sport)
                        .filter_map(|row| row.metrics.get(key).map(|v| (row.date, *v)))
                        .collect();
                    if points.is_empty() {
                        return None;
                    }
                    points.sort_by_key(|(date, _)| *date);
                    Some(MetricSeries { key, title, points })
                })
                .collect();
            SportMetrics { sport, series }
        })
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Capitalize the first letter of each word and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
