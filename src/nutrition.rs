//! Daily nutrition totals and macro trend classification
//!
//! Raw meal items and water logs are summed into one totals row per calendar
//! day in the analysis window (zero-filled for unlogged days), then each
//! tracked macro gets a trend: today's value against the weekly average,
//! a direction, and a consistency percentage against its target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::nutrition::{MealEntry, NutritionGoals, WaterEntry};
use crate::window::DayWindow;

/// Band around a target that still counts as on-goal (±10%)
pub const GOAL_BAND: f64 = 0.10;

/// ---------------------------------------------------------------------------
/// Daily totals
/// ---------------------------------------------------------------------------

/// Summed intake for one calendar day. Days with no entries stay at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutritionTotals {
  pub date: NaiveDate,
  pub calories: f64,
  pub protein: f64,
  pub carbs: f64,
  pub fat: f64,
  pub water: f64,
}

impl DailyNutritionTotals {
  fn zero(date: NaiveDate) -> Self {
    Self {
      date,
      calories: 0.0,
      protein: 0.0,
      carbs: 0.0,
      fat: 0.0,
      water: 0.0,
    }
  }

  /// Sum meal and water records into a fixed day series covering exactly the
  /// window, ascending by date
  pub fn aggregate(
    window: &DayWindow,
    meals: &[MealEntry],
    water: &[WaterEntry],
  ) -> Vec<Self> {
    let meal_buckets = window.bucket_by_day(meals, |m| m.date);
    let water_buckets = window.bucket_by_day(water, |w| w.date);

    window
      .days()
      .iter()
      .map(|&date| {
        let mut totals = Self::zero(date);
        for meal in &meal_buckets[&date] {
          totals.calories += meal.calories;
          totals.protein += meal.protein_g;
          totals.carbs += meal.carbs_g;
          totals.fat += meal.fat_g;
        }
        for entry in &water_buckets[&date] {
          totals.water += entry.amount_ml;
        }
        totals
      })
      .collect()
  }

  /// Whether this day hit the calorie goal (within ±10% of target)
  pub fn goal_achieved(&self, goals: &NutritionGoals) -> bool {
    within_goal_band(self.calories, goals.calories_target)
  }
}

/// True when `value` lies inside [0.9 × target, 1.1 × target]
pub fn within_goal_band(value: f64, target: f64) -> bool {
  value >= target * (1.0 - GOAL_BAND) && value <= target * (1.0 + GOAL_BAND)
}

/// ---------------------------------------------------------------------------
/// Macro trends
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
  Calories,
  Protein,
  Carbs,
  Fat,
}

impl std::fmt::Display for Macro {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Calories => write!(f, "calories"),
      Self::Protein => write!(f, "protein"),
      Self::Carbs => write!(f, "carbs"),
      Self::Fat => write!(f, "fat"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
  Rising,
  Falling,
  Stable,
}

/// Trend for one tracked macro over the window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTrend {
  pub macro_kind: Macro,
  /// Today's value (last day in the window)
  pub current: f64,
  pub weekly_average: f64,
  /// Today vs the weekly average; 0 when the average is 0
  pub percent_change: f64,
  pub direction: TrendDirection,
  /// Share of days within ±10% of target, 0-100
  pub consistency: u32,
}

impl MacroTrend {
  /// Classify all four tracked macros over the day series
  pub fn compute_all(series: &[DailyNutritionTotals], goals: &NutritionGoals) -> Vec<Self> {
    if series.is_empty() {
      return Vec::new();
    }

    [Macro::Calories, Macro::Protein, Macro::Carbs, Macro::Fat]
      .into_iter()
      .map(|m| Self::compute(m, series, goals))
      .collect()
  }

  fn compute(macro_kind: Macro, series: &[DailyNutritionTotals], goals: &NutritionGoals) -> Self {
    let values: Vec<f64> = series.iter().map(|day| field(day, macro_kind)).collect();
    let target = target_for(goals, macro_kind);

    let current = *values.last().expect("series is non-empty");
    let weekly_average = values.iter().sum::<f64>() / values.len() as f64;

    let percent_change = if weekly_average == 0.0 {
      0.0
    } else {
      100.0 * (current - weekly_average) / weekly_average
    };

    // Only calories and protein get directional trends; carbs and fat are
    // reported stable regardless of intake
    let direction = match macro_kind {
      Macro::Calories => {
        if weekly_average > target {
          TrendDirection::Rising
        } else if weekly_average < target * (1.0 - GOAL_BAND) {
          TrendDirection::Falling
        } else {
          TrendDirection::Stable
        }
      }
      Macro::Protein => {
        if weekly_average >= target {
          TrendDirection::Rising
        } else {
          TrendDirection::Falling
        }
      }
      Macro::Carbs | Macro::Fat => TrendDirection::Stable,
    };

    Self {
      macro_kind,
      current,
      weekly_average,
      percent_change,
      direction,
      consistency: consistency(&values, target),
    }
  }
}

fn field(day: &DailyNutritionTotals, macro_kind: Macro) -> f64 {
  match macro_kind {
    Macro::Calories => day.calories,
    Macro::Protein => day.protein,
    Macro::Carbs => day.carbs,
    Macro::Fat => day.fat,
  }
}

fn target_for(goals: &NutritionGoals, macro_kind: Macro) -> f64 {
  match macro_kind {
    Macro::Calories => goals.calories_target,
    Macro::Protein => goals.protein_target,
    Macro::Carbs => goals.carbs_target,
    Macro::Fat => goals.fat_target,
  }
}

/// Percentage of values landing within ±10% of target, rounded; 0 for an
/// empty slice
pub fn consistency(values: &[f64], target: f64) -> u32 {
  if values.is_empty() {
    return 0;
  }

  let on_target = values.iter().filter(|&&v| within_goal_band(v, target)).count();
  (100.0 * on_target as f64 / values.len() as f64).round() as u32
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
