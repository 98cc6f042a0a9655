//! Composite nutrition adherence score
//!
//! Five weighted sub-scores summarize how closely a week of logged nutrition
//! matched the active goals, then the composite maps to a letter grade. Every
//! sub-score and the overall score are rounded to whole points before
//! grading.

use serde::{Deserialize, Serialize};

use crate::models::nutrition::NutritionGoals;
use crate::nutrition::DailyNutritionTotals;

/// kcal per gram for protein / carbs / fat
const PROTEIN_KCAL_PER_G: f64 = 4.0;
const CARBS_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;

/// ---------------------------------------------------------------------------
/// Letter grades
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
  APlus,
  A,
  BPlus,
  B,
  CPlus,
  C,
  D,
  F,
}

impl Grade {
  /// Map a 0-100 score to a grade; lower bounds are inclusive
  pub fn from_score(score: u32) -> Self {
    match score {
      95.. => Self::APlus,
      85.. => Self::A,
      80.. => Self::BPlus,
      70.. => Self::B,
      65.. => Self::CPlus,
      55.. => Self::C,
      45.. => Self::D,
      _ => Self::F,
    }
  }
}

impl std::fmt::Display for Grade {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      Self::APlus => "A+",
      Self::A => "A",
      Self::BPlus => "B+",
      Self::B => "B",
      Self::CPlus => "C+",
      Self::C => "C",
      Self::D => "D",
      Self::F => "F",
    };
    write!(f, "{}", label)
  }
}

/// ---------------------------------------------------------------------------
/// Score
/// ---------------------------------------------------------------------------

/// Weighted adherence summary over the day series. All fields 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionScore {
  pub overall: u32,
  pub grade: Grade,
  /// Days within ±10% of the calorie target
  pub calorie_accuracy: u32,
  /// Days meeting or exceeding the protein target
  pub protein_goal: u32,
  /// Protein share of total macro calories vs the 25-35% band
  pub macro_balance: u32,
  /// Days with any logged calories
  pub consistency: u32,
  /// Average water intake vs target, capped at 100
  pub hydration: u32,
}

impl NutritionScore {
  /// Score a day series against the active goals. An empty series scores 0
  /// across the board and grades F.
  pub fn compute(series: &[DailyNutritionTotals], goals: &NutritionGoals) -> Self {
    if series.is_empty() {
      return Self {
        overall: 0,
        grade: Grade::F,
        calorie_accuracy: 0,
        protein_goal: 0,
        macro_balance: 0,
        consistency: 0,
        hydration: 0,
      };
    }

    let days = series.len() as f64;

    let calorie_days = series.iter().filter(|d| d.goal_achieved(goals)).count() as f64;
    let calorie_accuracy = (100.0 * calorie_days / days).round() as u32;

    let protein_days = series
      .iter()
      .filter(|d| d.protein >= goals.protein_target)
      .count() as f64;
    let protein_goal = (100.0 * protein_days / days).round() as u32;

    let macro_balance = Self::macro_balance(series);

    let logged_days = series.iter().filter(|d| d.calories > 0.0).count() as f64;
    let consistency = (100.0 * logged_days / days).round() as u32;

    let avg_water = series.iter().map(|d| d.water).sum::<f64>() / days;
    let hydration = if goals.water_target_ml > 0.0 {
      (100.0 * avg_water / goals.water_target_ml).min(100.0).round() as u32
    } else {
      0
    };

    let overall = (0.25 * f64::from(calorie_accuracy)
      + 0.25 * f64::from(protein_goal)
      + 0.20 * f64::from(macro_balance)
      + 0.20 * f64::from(consistency)
      + 0.10 * f64::from(hydration))
    .round() as u32;

    Self {
      overall,
      grade: Grade::from_score(overall),
      calorie_accuracy,
      protein_goal,
      macro_balance,
      consistency,
      hydration,
    }
  }

  /// Protein share of total macro calories across the week: 100 inside the
  /// 25-35% band, otherwise 3 points off per percent away from 30
  fn macro_balance(series: &[DailyNutritionTotals]) -> u32 {
    let protein_kcal: f64 = series.iter().map(|d| d.protein * PROTEIN_KCAL_PER_G).sum();
    let carbs_kcal: f64 = series.iter().map(|d| d.carbs * CARBS_KCAL_PER_G).sum();
    let fat_kcal: f64 = series.iter().map(|d| d.fat * FAT_KCAL_PER_G).sum();

    let total = protein_kcal + carbs_kcal + fat_kcal;
    if total == 0.0 {
      return 0;
    }

    let share = 100.0 * protein_kcal / total;
    if (25.0..=35.0).contains(&share) {
      100
    } else {
      (100.0 - 3.0 * (30.0 - share).abs()).max(0.0).round() as u32
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

  fn week(calories: f64, protein: f64, carbs: f64, fat: f64, water: f64) -> Vec<DailyNutritionTotals> {
    (1..=7)
      .map(|d| DailyNutritionTotals {
        date: NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
        calories,
        protein,
        carbs,
        fat,
        water,
      })
      .collect()
  }

  #[test]
  fn test_perfect_week_on_default_goals() {
    // Arrange: every day exactly on every target
    // Macro share: 150g×4 / (150×4 + 200×4 + 65×9) = 600/1985 ≈ 30.2% → in band
    let goals = NutritionGoals::default();
    let series = week(2000.0, 150.0, 200.0, 65.0, 2500.0);

    // Act
    let score = NutritionScore::compute(&series, &goals);

    // Assert: all sub-scores maxed
    assert_eq!(score.calorie_accuracy, 100);
    assert_eq!(score.protein_goal, 100);
    assert_eq!(score.macro_balance, 100);
    assert_eq!(score.consistency, 100);
    assert_eq!(score.hydration, 100);
    assert_eq!(score.overall, 100);
    assert_eq!(score.grade, Grade::APlus);
  }

  #[test]
  fn test_flat_2000_calorie_week_hits_accuracy_and_consistency() {
    // 7-day series all at 2000 against a 2000 target
    let goals = NutritionGoals::default();
    let series = week(2000.0, 0.0, 0.0, 0.0, 0.0);

    let score = NutritionScore::compute(&series, &goals);

    assert_eq!(score.calorie_accuracy, 100);
    assert_eq!(score.consistency, 100);
  }

  #[test]
  fn test_zero_water_with_nonzero_target() {
    // All water logs 0 must yield hydration 0 without a division error
    let goals = NutritionGoals::default();
    let series = week(2000.0, 150.0, 200.0, 65.0, 0.0);

    let score = NutritionScore::compute(&series, &goals);

    assert_eq!(score.hydration, 0);
  }

  #[test]
  fn test_hydration_caps_at_100() {
    let goals = NutritionGoals::default();
    let series = week(2000.0, 150.0, 200.0, 65.0, 9000.0);

    let score = NutritionScore::compute(&series, &goals);

    assert_eq!(score.hydration, 100);
  }

  #[test]
  fn test_macro_balance_penalty_outside_band() {
    // Carbs-only week: protein share 0% → max(0, 100 − 3×30) = 10
    let goals = NutritionGoals::default();
    let series = week(2000.0, 0.0, 500.0, 0.0, 0.0);

    let score = NutritionScore::compute(&series, &goals);

    assert_eq!(score.macro_balance, 10);
  }

  #[test]
  fn test_empty_series_scores_zero_grade_f() {
    let score = NutritionScore::compute(&[], &NutritionGoals::default());

    assert_eq!(score.overall, 0);
    assert_eq!(score.grade, Grade::F);
    assert_eq!(score.calorie_accuracy, 0);
    assert_eq!(score.hydration, 0);
  }

  #[test]
  fn test_overall_stays_in_bounds() {
    let goals = NutritionGoals::default();
    let series = week(1000.0, 80.0, 100.0, 30.0, 1000.0);

    let score = NutritionScore::compute(&series, &goals);

    assert!(score.overall <= 100);
  }

  #[test]
  fn test_grade_mapping_is_total_and_boundary_inclusive() {
    assert_eq!(Grade::from_score(100), Grade::APlus);
    assert_eq!(Grade::from_score(95), Grade::APlus);
    assert_eq!(Grade::from_score(94), Grade::A);
    assert_eq!(Grade::from_score(85), Grade::A);
    assert_eq!(Grade::from_score(84), Grade::BPlus);
    assert_eq!(Grade::from_score(80), Grade::BPlus);
    assert_eq!(Grade::from_score(79), Grade::B);
    assert_eq!(Grade::from_score(70), Grade::B);
    assert_eq!(Grade::from_score(69), Grade::CPlus);
    assert_eq!(Grade::from_score(65), Grade::CPlus);
    assert_eq!(Grade::from_score(64), Grade::C);
    assert_eq!(Grade::from_score(55), Grade::C);
    assert_eq!(Grade::from_score(54), Grade::D);
    assert_eq!(Grade::from_score(45), Grade::D);
    assert_eq!(Grade::from_score(44), Grade::F);
    assert_eq!(Grade::from_score(0), Grade::F);
  }

  #[test]
  fn test_grade_display_labels() {
    assert_eq!(Grade::APlus.to_string(), "A+");
    assert_eq!(Grade::BPlus.to_string(), "B+");
    assert_eq!(Grade::F.to_string(), "F");
  }
}
