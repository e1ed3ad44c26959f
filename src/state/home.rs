// Home view state.
// Derives today's session summary and quick profile stats from the snapshot.

use crate::snapshot::AthleteSnapshot;
use crate::snapshot::types::format_number;

pub const REST_DAY: &str = "Rest Day";
const NOT_AVAILABLE: &str = "N/A";

/// Summary card for today's planned session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary {
    pub session: String,
    pub status: &'static str,
    pub duration: &'static str,
    pub effort: &'static str,
}

impl TodaySummary {
    /// Today's session is the first session of the first planned week.
    /// An empty plan, or a first week with no sessions, is a rest day.
    pub fn from_snapshot(snapshot: &AthleteSnapshot) -> Self {
        match snapshot.first_session() {
            Some(session) => Self::for_session(session),
            None => Self::rest_day(),
        }
    }

    pub fn rest_day() -> Self {
        Self {
            session: REST_DAY.to_string(),
            status: "Rest",
            duration: "0 m",
            effort: "Easy",
        }
    }

    fn for_session(session: &str) -> Self {
        let is_bike = session.contains("Bike");
        let is_run = session.contains("Run");
        let is_swim = session.contains("Swim");

        let status = if is_bike || is_run || is_swim {
            "Training"
        } else {
            NOT_AVAILABLE
        };
        let (duration, effort) = if is_bike {
            ("1h 30 m", "Moderate")
        } else if is_run {
            ("45 min", "Easy")
        } else {
            (NOT_AVAILABLE, NOT_AVAILABLE)
        };

        Self {
            session: session.to_string(),
            status,
            duration,
            effort,
        }
    }

    pub fn is_rest_day(&self) -> bool {
        self.status == "Rest"
    }
}

/// A labelled profile value for the quick status cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

impl QuickStat {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Quick status cards in display order.
pub fn quick_stats(snapshot: &AthleteSnapshot) -> Vec<QuickStat> {
    let profile = &snapshot.profile;
    vec![
        QuickStat::new("Weight", with_unit(profile.weight_kg, " kg")),
        QuickStat::new("Resting HR", with_unit(profile.resting_hr, " bpm")),
        QuickStat::new("Body Fat %", with_unit(profile.body_fat_pct, "%")),
        QuickStat::new("VO2 Max", format_number(profile.vo2max)),
        QuickStat::new(
            "Athlete",
            profile
                .name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ]
}

/// The athlete score card value.
pub fn athlete_score(snapshot: &AthleteSnapshot) -> String {
    format_number(Some(snapshot.profile.athlete_score_or_default()))
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(_) => format!("{}{}", format_number(value), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TrainingWeek;

    fn with_sessions(sessions: &[&str]) -> AthleteSnapshot {
        AthleteSnapshot {
            training_plan: vec![TrainingWeek {
                week: Some(1),
                start_date: Some("2024-06-03".into()),
                sessions: sessions.iter().map(|s| s.to_string()).collect(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_plan_is_rest_day() {
        let summary = TodaySummary::from_snapshot(&AthleteSnapshot::default());
        assert_eq!(summary.session, "Rest Day");
        assert_eq!(summary.status, "Rest");
        assert_eq!(summary.duration, "0 m");
        assert_eq!(summary.effort, "Easy");
        assert!(summary.is_rest_day());
    }

    #[test]
    fn test_week_without_sessions_is_rest_day() {
        let summary = TodaySummary::from_snapshot(&with_sessions(&[]));
        assert_eq!(summary, TodaySummary::rest_day());
    }

    #[test]
    fn test_bike_session() {
        let summary = TodaySummary::from_snapshot(&with_sessions(&["Bike 2h Z2", "Run 30min"]));
        assert_eq!(summary.session, "Bike 2h Z2");
        assert_eq!(summary.status, "Training");
        assert_eq!(summary.duration, "1h 30 m");
        assert_eq!(summary.effort, "Moderate");
    }

    #[test]
    fn test_run_and_swim_sessions() {
        let run = TodaySummary::from_snapshot(&with_sessions(&["Run intervals"]));
        assert_eq!((run.duration, run.effort), ("45 min", "Easy"));

        let swim = TodaySummary::from_snapshot(&with_sessions(&["Swim 2km"]));
        assert_eq!(swim.status, "Training");
        assert_eq!((swim.duration, swim.effort), ("N/A", "N/A"));
    }

    #[test]
    fn test_unrecognised_session() {
        let summary = TodaySummary::from_snapshot(&with_sessions(&["Mobility"]));
        assert_eq!(summary.status, "N/A");
        assert!(!summary.is_rest_day());
    }

    #[test]
    fn test_quick_stats_defaults() {
        let snapshot = AthleteSnapshot::default();
        let stats = quick_stats(&snapshot);
        assert_eq!(stats.len(), 5);
        assert!(stats.iter().all(|s| s.value == "N/A"));
        assert_eq!(athlete_score(&snapshot), "78");
    }

    #[test]
    fn test_quick_stats_values() {
        let mut snapshot = AthleteSnapshot::default();
        snapshot.profile.weight_kg = Some(71.5);
        snapshot.profile.resting_hr = Some(48.0);
        snapshot.profile.body_fat_pct = Some(12.0);
        snapshot.profile.name = Some("Sam".into());
        snapshot.profile.athlete_score = Some(83.0);

        let stats = quick_stats(&snapshot);
        assert_eq!(stats[0].value, "71.5 kg");
        assert_eq!(stats[1].value, "48 bpm");
        assert_eq!(stats[2].value, "12%");
        assert_eq!(stats[4].value, "Sam");
        assert_eq!(athlete_score(&snapshot), "83");
    }
}
