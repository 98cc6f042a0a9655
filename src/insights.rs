//! Insights assembly
//!
//! Runs the full analytics pipeline over one snapshot of logged data and
//! packages the result as a single read-only object for the presentation
//! layer. Each build is a fresh computation; nothing is retained between
//! calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adherence::NutritionScore;
use crate::cycle::{CycleStatus, WeekStrategy};
use crate::models::nutrition::{MealEntry, NutritionGoals, WaterEntry};
use crate::models::workout::{ExerciseDefinition, WorkoutSession};
use crate::nutrition::{DailyNutritionTotals, MacroTrend};
use crate::streaks::StreakData;
use crate::volume::{ProcessedSession, SessionAnalyzer};
use crate::window::{DayWindow, WindowError};

/// Canonical nutrition analysis window
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Everything the presentation layer needs, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
  /// Last day of the analysis window
  pub reference_date: NaiveDate,
  pub cycle: CycleStatus,
  pub sessions: Vec<ProcessedSession>,
  pub daily_totals: Vec<DailyNutritionTotals>,
  pub macro_trends: Vec<MacroTrend>,
  pub nutrition_score: NutritionScore,
  pub streaks: Vec<StreakData>,
}

impl InsightsReport {
  /// Build the full report from one snapshot. Sessions must be sorted
  /// ascending by timestamp; absent goals fall back to the defaults.
  pub fn build(
    sessions: &[WorkoutSession],
    catalog: &[ExerciseDefinition],
    meals: &[MealEntry],
    water: &[WaterEntry],
    goals: Option<NutritionGoals>,
    reference_date: NaiveDate,
    window_days: usize,
    strategy: WeekStrategy,
  ) -> Result<Self, WindowError> {
    let goals = goals.unwrap_or_default();
    let window = DayWindow::ending_at(reference_date, window_days)?;

    let cycle = CycleStatus::compute(sessions, strategy);
    let processed = SessionAnalyzer::analyze_all(sessions, catalog);

    let daily_totals = DailyNutritionTotals::aggregate(&window, meals, water);
    let macro_trends = MacroTrend::compute_all(&daily_totals, &goals);
    let nutrition_score = NutritionScore::compute(&daily_totals, &goals);
    let streaks = StreakData::compute_all(&daily_totals, &goals);

    debug!(
      sessions = processed.len(),
      window_days,
      score = nutrition_score.overall,
      "built insights report"
    );

    Ok(Self {
      reference_date,
      cycle,
      sessions: processed,
      daily_totals,
      macro_trends,
      nutrition_score,
      streaks,
    })
  }

  /// Serialize for the consuming surface
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
