//! Training cycle position
//!
//! Computes where the lifter is in the current training cycle: week number,
//! whether the week is a scheduled deload, and how many weeks remain until
//! the next one. Two week-numbering schemes exist in the app for different
//! reports, so the caller picks one explicitly rather than the engine
//! guessing.

use serde::{Deserialize, Serialize};

use crate::models::workout::WorkoutSession;

/// Sessions per "week" unit under the session-count scheme, independent of
/// calendar time
pub const SESSIONS_PER_WEEK: usize = 3;

/// Every Nth week is a deload
pub const DELOAD_FREQUENCY_WEEKS: u32 = 6;

/// ---------------------------------------------------------------------------
/// Week numbering strategies
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStrategy {
  /// Week advances every SESSIONS_PER_WEEK logged sessions
  SessionCount,
  /// Week advances with calendar time since the first session
  Calendar,
}

impl std::fmt::Display for WeekStrategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::SessionCount => write!(f, "session_count"),
      Self::Calendar => write!(f, "calendar"),
    }
  }
}

/// Week number for the session at 0-based position `index` under the
/// session-count scheme
pub fn session_count_week(index: usize) -> u32 {
  (index / SESSIONS_PER_WEEK) as u32 + 1
}

/// Week number for a session logged `days_since_first` days after the first
/// session under the calendar scheme. The first session's own day counts as
/// week 1, matching where the session-count scheme starts.
pub fn calendar_week(days_since_first: i64) -> u32 {
  let days = days_since_first.max(0) as u32;
  days.div_ceil(7).max(1)
}

/// True iff `week` is a scheduled deload week
pub fn is_deload_week(week: u32) -> bool {
  week > 0 && week % DELOAD_FREQUENCY_WEEKS == 0
}

/// Whole weeks until the next deload; 0 means the current week is the deload
pub fn weeks_until_deload(week: u32) -> u32 {
  (DELOAD_FREQUENCY_WEEKS - (week % DELOAD_FREQUENCY_WEEKS)) % DELOAD_FREQUENCY_WEEKS
}

/// ---------------------------------------------------------------------------
/// Cycle status
/// ---------------------------------------------------------------------------

/// Current cycle position derived from an ordered session list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleStatus {
  pub strategy: WeekStrategy,
  pub current_week: u32,
  pub is_deload_week: bool,
  pub weeks_until_deload: u32,
  pub total_sessions: usize,
}

impl CycleStatus {
  /// Compute cycle position from sessions sorted ascending by timestamp.
  /// An empty list yields week 0 with no deload scheduled.
  pub fn compute(sessions: &[WorkoutSession], strategy: WeekStrategy) -> Self {
    if sessions.is_empty() {
      return Self {
        strategy,
        current_week: 0,
        is_deload_week: false,
        weeks_until_deload: 0,
        total_sessions: 0,
      };
    }

    let current_week = match strategy {
      WeekStrategy::SessionCount => session_count_week(sessions.len() - 1),
      WeekStrategy::Calendar => {
        let first = sessions[0].timestamp;
        let last = sessions[sessions.len() - 1].timestamp;
        calendar_week((last - first).num_days())
      }
    };

    Self {
      strategy,
      current_week,
      is_deload_week: is_deload_week(current_week),
      weeks_until_deload: weeks_until_deload(current_week),
      total_sessions: sessions.len(),
    }
  }

  /// Week number for every session in the list under the chosen strategy
  pub fn week_numbers(sessions: &[WorkoutSession], strategy: WeekStrategy) -> Vec<u32> {
    match strategy {
      WeekStrategy::SessionCount => {
        (0..sessions.len()).map(session_count_week).collect()
      }
      WeekStrategy::Calendar => {
        let first = match sessions.first() {
          Some(s) => s.timestamp,
          None => return Vec::new(),
        };
        sessions
          .iter()
          .map(|s| calendar_week((s.timestamp - first).num_days()))
          .collect()
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
