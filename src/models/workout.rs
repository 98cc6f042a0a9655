use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged lift within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
  pub exercise_name: String,
  pub weight: f64,
  pub completed: bool,
}

/// One logged training session. Immutable once logged; analysis expects
/// session lists sorted ascending by timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
  pub id: i64,
  pub timestamp: DateTime<Utc>,
  pub program_tag: String,
  pub exercise_entries: Vec<ExerciseEntry>,
}

/// Prescribed rep count from the exercise catalog: either a plain count
/// or a "min-max" range string (e.g. "8-12")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepRange {
  Count(u32),
  Range(String),
}

/// Catalog entry describing how an exercise is prescribed for a program day.
/// Matched to logged entries by trimmed, case-insensitive name equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDefinition {
  pub name: String,
  pub sets: u32,
  pub rep_range: RepRange,
  pub is_compound: bool,
}

/// Shared name normalization applied at every catalog comparison site
pub fn normalize_name(name: &str) -> String {
  name.trim().to_lowercase()
}
