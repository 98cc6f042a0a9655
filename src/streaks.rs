//! Day-based streak counters
//!
//! Counts consecutive qualifying days ending at the most recent day in the
//! series, per goal type. The core is stateless, so "longest" has no real
//! historical memory; it is reported as the current streak floored at a
//! per-goal display constant.

use serde::{Deserialize, Serialize};

use crate::models::nutrition::NutritionGoals;
use crate::nutrition::DailyNutritionTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
  /// Calories within ±10% of target
  CalorieGoal,
  /// Protein at or above target
  ProteinGoal,
  /// Water at or above target
  WaterGoal,
  /// Anything logged at all
  Logging,
}

impl GoalType {
  pub const ALL: [GoalType; 4] = [
    GoalType::CalorieGoal,
    GoalType::ProteinGoal,
    GoalType::WaterGoal,
    GoalType::Logging,
  ];

  /// Whether a day qualifies for this goal type
  fn passes(&self, day: &DailyNutritionTotals, goals: &NutritionGoals) -> bool {
    match self {
      GoalType::CalorieGoal => day.goal_achieved(goals),
      GoalType::ProteinGoal => day.protein >= goals.protein_target,
      GoalType::WaterGoal => day.water >= goals.water_target_ml,
      GoalType::Logging => day.calories > 0.0,
    }
  }

  /// Stateless stand-in for historical longest streaks (see DESIGN.md)
  fn longest_floor(&self) -> u32 {
    match self {
      GoalType::CalorieGoal => 5,
      GoalType::ProteinGoal => 7,
      GoalType::WaterGoal => 4,
      GoalType::Logging => 12,
    }
  }
}

/// Streak counters for one goal type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakData {
  pub goal_type: GoalType,
  pub current_streak: u32,
  /// max(current, per-goal floor) — not authoritative history
  pub longest_streak: u32,
}

impl StreakData {
  /// Compute streaks for every goal type over an ascending day series.
  /// An empty series yields an empty list.
  pub fn compute_all(series: &[DailyNutritionTotals], goals: &NutritionGoals) -> Vec<Self> {
    if series.is_empty() {
      return Vec::new();
    }

    GoalType::ALL
      .into_iter()
      .map(|goal_type| Self::compute(goal_type, series, goals))
      .collect()
  }

  fn compute(goal_type: GoalType, series: &[DailyNutritionTotals], goals: &NutritionGoals) -> Self {
    // Walk backward from the most recent day until the first failure
    let current_streak = series
      .iter()
      .rev()
      .take_while(|day| goal_type.passes(day, goals))
      .count() as u32;

    Self {
      goal_type,
      current_streak,
      longest_streak: current_streak.max(goal_type.longest_floor()),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn day(d: u32, calories: f64, protein: f64, water: f64) -> DailyNutritionTotals {
    DailyNutritionTotals {
      date: NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
      calories,
      protein,
      carbs: 0.0,
      fat: 0.0,
      water,
    }
  }

  fn streak_for(streaks: &[StreakData], goal_type: GoalType) -> &StreakData {
    streaks.iter().find(|s| s.goal_type == goal_type).unwrap()
  }

  #[test]
  fn test_current_streak_counts_backward_to_first_failure() {
    // Arrange: logging gap on day 3, then 4 logged days through today
    let goals = NutritionGoals::default();
    let series = vec![
      day(1, 1900.0, 150.0, 2500.0),
      day(2, 2000.0, 150.0, 2500.0),
      day(3, 0.0, 0.0, 0.0), // missed day
      day(4, 2100.0, 150.0, 2500.0),
      day(5, 1950.0, 150.0, 2500.0),
      day(6, 2000.0, 150.0, 2500.0),
      day(7, 2050.0, 150.0, 2500.0),
    ];

    // Act
    let streaks = StreakData::compute_all(&series, &goals);

    // Assert: the gap caps every streak at 4
    assert_eq!(streak_for(&streaks, GoalType::Logging).current_streak, 4);
    assert_eq!(streak_for(&streaks, GoalType::CalorieGoal).current_streak, 4);
    assert_eq!(streak_for(&streaks, GoalType::ProteinGoal).current_streak, 4);
    assert_eq!(streak_for(&streaks, GoalType::WaterGoal).current_streak, 4);
  }

  #[test]
  fn test_streak_is_zero_when_most_recent_day_fails() {
    let goals = NutritionGoals::default();
    let series = vec![
      day(1, 2000.0, 150.0, 2500.0),
      day(2, 2000.0, 150.0, 2500.0),
      day(3, 0.0, 0.0, 0.0), // today failed
    ];

    let streaks = StreakData::compute_all(&series, &goals);

    assert_eq!(streak_for(&streaks, GoalType::Logging).current_streak, 0);
    assert_eq!(streak_for(&streaks, GoalType::CalorieGoal).current_streak, 0);
  }

  #[test]
  fn test_goal_types_fail_independently() {
    // Arrange: calories fine every day, protein short today, no water at all
    let goals = NutritionGoals::default();
    let series = vec![
      day(1, 2000.0, 160.0, 0.0),
      day(2, 2000.0, 155.0, 0.0),
      day(3, 2000.0, 100.0, 0.0),
    ];

    let streaks = StreakData::compute_all(&series, &goals);

    assert_eq!(streak_for(&streaks, GoalType::CalorieGoal).current_streak, 3);
    assert_eq!(streak_for(&streaks, GoalType::ProteinGoal).current_streak, 0);
    assert_eq!(streak_for(&streaks, GoalType::WaterGoal).current_streak, 0);
    assert_eq!(streak_for(&streaks, GoalType::Logging).current_streak, 3);
  }

  #[test]
  fn test_longest_streak_is_floored_not_historical() {
    // A 2-day current streak reports the per-goal floor as longest
    let goals = NutritionGoals::default();
    let series = vec![day(1, 0.0, 0.0, 0.0), day(2, 2000.0, 150.0, 2500.0), day(3, 2000.0, 150.0, 2500.0)];

    let streaks = StreakData::compute_all(&series, &goals);

    let protein = streak_for(&streaks, GoalType::ProteinGoal);
    assert_eq!(protein.current_streak, 2);
    assert_eq!(protein.longest_streak, 7, "Floor constant wins over a short current streak");

    // A longer current streak beats its floor
    let long_series: Vec<_> = (1..=14).map(|d| day(d, 2000.0, 150.0, 2500.0)).collect();
    let streaks = StreakData::compute_all(&long_series, &goals);
    let protein = streak_for(&streaks, GoalType::ProteinGoal);
    assert_eq!(protein.current_streak, 14);
    assert_eq!(protein.longest_streak, 14);
  }

  #[test]
  fn test_empty_series_yields_empty_streak_list() {
    let streaks = StreakData::compute_all(&[], &NutritionGoals::default());
    assert!(streaks.is_empty());
  }
}
