//! Session volume and personal-record detection
//!
//! Processes sessions in one chronological pass. All running state (max
//! weight per exercise, max volume per program tag, last volume per tag,
//! weight history) lives in explicit accumulator maps on the analyzer, so a
//! batch over a fresh analyzer is fully deterministic and stateless between
//! invocations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::workout::{normalize_name, ExerciseDefinition, RepRange, WorkoutSession};

/// Rep count assumed when the catalog range cannot be resolved
pub const DEFAULT_REPS: f64 = 10.0;

/// How many recent weight observations the per-exercise history keeps
const HISTORY_LEN: usize = 5;

/// ---------------------------------------------------------------------------
/// Rep resolution
/// ---------------------------------------------------------------------------

/// Resolve a catalog rep prescription to a single rep count: a scalar is
/// used directly, a "min-max" range uses the mean of its bounds, anything
/// else falls back to DEFAULT_REPS.
pub fn resolve_reps(range: &RepRange) -> f64 {
  match range {
    RepRange::Count(n) => f64::from(*n),
    RepRange::Range(s) => parse_rep_range(s).unwrap_or_else(|| {
      warn!(range = %s, "unparseable rep range, assuming {} reps", DEFAULT_REPS);
      DEFAULT_REPS
    }),
  }
}

fn parse_rep_range(s: &str) -> Option<f64> {
  // Catalog data uses both plain hyphens and en-dashes
  let (min, max) = s.split_once(['-', '\u{2013}'])?;
  let min: f64 = min.trim().parse().ok()?;
  let max: f64 = max.trim().parse().ok()?;
  Some((min + max) / 2.0)
}

/// ---------------------------------------------------------------------------
/// Processed output
/// ---------------------------------------------------------------------------

/// Per-exercise line of a processed session. Entries that did not match the
/// catalog (or carried no weight) are retained for display but contribute
/// nothing to volume or PR tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseBreakdown {
  pub exercise_name: String,
  pub weight: f64,
  pub completed: bool,
  pub matched: bool,
  pub volume: f64,
  pub is_pr: bool,
  pub previous_weight: Option<f64>,
  pub delta: Option<f64>,
  /// Most recent weight observations for this exercise, oldest first,
  /// including the current one (at most HISTORY_LEN)
  pub history: Vec<f64>,
}

/// One session after the analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedSession {
  pub id: i64,
  pub timestamp: DateTime<Utc>,
  pub program_tag: String,
  pub total_volume: f64,
  pub is_pr: bool,
  /// Volume change vs the nearest earlier session with the same program tag;
  /// None when no such session exists or its volume was 0
  pub improvement_percent: Option<f64>,
  pub exercises: Vec<ExerciseBreakdown>,
}

/// ---------------------------------------------------------------------------
/// Chronological analyzer
/// ---------------------------------------------------------------------------

type ExerciseKey = (String, String); // (program_tag, normalized exercise name)

/// Accumulator for one chronological pass over a session list
#[derive(Debug, Default)]
pub struct SessionAnalyzer {
  max_weight: HashMap<ExerciseKey, f64>,
  max_volume_by_tag: HashMap<String, f64>,
  last_volume_by_tag: HashMap<String, f64>,
  weight_history: HashMap<ExerciseKey, Vec<f64>>,
}

impl SessionAnalyzer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Process every session in order. Sessions must already be sorted
  /// ascending by timestamp; the analyzer does not re-sort.
  pub fn analyze_all(
    sessions: &[WorkoutSession],
    catalog: &[ExerciseDefinition],
  ) -> Vec<ProcessedSession> {
    let mut analyzer = Self::new();
    let processed = sessions
      .iter()
      .map(|s| analyzer.process(s, catalog))
      .collect();
    debug!(sessions = sessions.len(), "processed session batch");
    processed
  }

  /// Process one session, updating the running accumulators
  pub fn process(
    &mut self,
    session: &WorkoutSession,
    catalog: &[ExerciseDefinition],
  ) -> ProcessedSession {
    let definitions: HashMap<String, &ExerciseDefinition> = catalog
      .iter()
      .map(|def| (normalize_name(&def.name), def))
      .collect();

    let mut exercises = Vec::with_capacity(session.exercise_entries.len());
    let mut total_volume = 0.0;
    let mut any_exercise_pr = false;

    for entry in &session.exercise_entries {
      let normalized = normalize_name(&entry.exercise_name);
      let matched = definitions.get(&normalized).copied();
      if matched.is_none() {
        debug!(exercise = %entry.exercise_name, "entry has no catalog match");
      }

      // Unmatched or weightless entries stay visible but untracked
      let definition = match matched {
        Some(def) if entry.weight > 0.0 => def,
        _ => {
          exercises.push(ExerciseBreakdown {
            exercise_name: entry.exercise_name.clone(),
            weight: entry.weight,
            completed: entry.completed,
            matched: matched.is_some(),
            volume: 0.0,
            is_pr: false,
            previous_weight: None,
            delta: None,
            history: Vec::new(),
          });
          continue;
        }
      };

      let reps = resolve_reps(&definition.rep_range);
      let volume = f64::from(definition.sets) * reps * entry.weight;
      total_volume += volume;

      let key = (session.program_tag.clone(), normalized);
      let previous_max = self.max_weight.get(&key).copied();

      // A PR needs a nonzero prior maximum: the first observation for a key
      // only seeds the tracker
      let is_pr = matches!(previous_max, Some(max) if max > 0.0 && entry.weight > max);
      if entry.weight > previous_max.unwrap_or(0.0) {
        self.max_weight.insert(key.clone(), entry.weight);
      }
      any_exercise_pr |= is_pr;

      let history = self.weight_history.entry(key).or_default();
      history.push(entry.weight);
      if history.len() > HISTORY_LEN {
        history.remove(0);
      }

      exercises.push(ExerciseBreakdown {
        exercise_name: entry.exercise_name.clone(),
        weight: entry.weight,
        completed: entry.completed,
        matched: true,
        volume,
        is_pr,
        previous_weight: previous_max,
        delta: previous_max.map(|prev| entry.weight - prev),
        history: history.clone(),
      });
    }

    // Session-over-session improvement against the nearest earlier session
    // with the same tag
    let improvement_percent = match self.last_volume_by_tag.get(&session.program_tag) {
      Some(&prev) if prev > 0.0 => Some(100.0 * (total_volume - prev) / prev),
      _ => None,
    };
    self
      .last_volume_by_tag
      .insert(session.program_tag.clone(), total_volume);

    // Session-level PR: any exercise PR, or total volume beating the nonzero
    // per-tag running maximum
    let previous_max_volume = self
      .max_volume_by_tag
      .get(&session.program_tag)
      .copied()
      .unwrap_or(0.0);
    let volume_pr = previous_max_volume > 0.0 && total_volume > previous_max_volume;
    if total_volume > previous_max_volume {
      self
        .max_volume_by_tag
        .insert(session.program_tag.clone(), total_volume);
    }

    ProcessedSession {
      id: session.id,
      timestamp: session.timestamp,
      program_tag: session.program_tag.clone(),
      total_volume,
      is_pr: any_exercise_pr || volume_pr,
      improvement_percent,
      exercises,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
