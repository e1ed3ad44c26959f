// Athlete snapshot types.
// Typed view of the snapshot document; every field is optional and defaults once at load.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The whole snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteSnapshot {
    #[serde(deserialize_with = "null_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "null_default")]
    pub training_plan: Vec<TrainingWeek>,
    /// Date string -> sessions recorded that day.
    #[serde(deserialize_with = "sessions_by_date")]
    pub metrics_collected: BTreeMap<String, Vec<SessionRecord>>,
}

impl AthleteSnapshot {
    /// The first session of the first planned week, if any.
    pub fn first_session(&self) -> Option<&str> {
        self.training_plan
            .first()
            .and_then(|week| week.sessions.first())
            .map(String::as_str)
    }

    /// Number of recorded sessions across all dates.
    pub fn session_count(&self) -> usize {
        self.metrics_collected.values().map(Vec::len).sum()
    }
}

/// Athlete profile scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub resting_hr: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub vo2max: Option<f64>,
    pub athlete_score: Option<f64>,
}

impl Profile {
    /// Score shown when the profile carries none.
    pub const DEFAULT_ATHLETE_SCORE: f64 = 78.0;

    pub fn athlete_score_or_default(&self) -> f64 {
        self.athlete_score.unwrap_or(Self::DEFAULT_ATHLETE_SCORE)
    }
}

/// One week of the training plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingWeek {
    pub week: Option<u32>,
    pub start_date: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub sessions: Vec<String>,
}

/// One recorded workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRecord {
    pub sport: Option<String>,
    /// Metric values; null entries are dropped at load.
    #[serde(deserialize_with = "present_values")]
    pub metrics: BTreeMap<String, f64>,
}

/// A line of the separately maintained training history file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub date: Option<String>,
    pub summary: Option<String>,
}

/// Treat an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn sessions_by_date<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<SessionRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let by_date: BTreeMap<String, Option<Vec<SessionRecord>>> = null_default(deserializer)?;
    Ok(by_date
        .into_iter()
        .map(|(date, sessions)| (date, sessions.unwrap_or_default()))
        .collect())
}

fn present_values<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: BTreeMap<String, Option<f64>> = null_default(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect())
}

/// Format an optional number for display, dropping a trailing ".0".
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}
