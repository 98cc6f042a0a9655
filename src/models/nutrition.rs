use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged meal item, already resolved to macro amounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
  pub date: NaiveDate,
  pub calories: f64,
  pub protein_g: f64,
  pub carbs_g: f64,
  pub fat_g: f64,
}

/// One logged water intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterEntry {
  pub date: NaiveDate,
  pub amount_ml: f64,
}

/// Daily nutrition targets. At most one active set exists; when the user has
/// none configured the defaults below keep every derived percentage defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoals {
  pub calories_target: f64,
  pub protein_target: f64,
  pub carbs_target: f64,
  pub fat_target: f64,
  pub water_target_ml: f64,
}

impl Default for NutritionGoals {
  fn default() -> Self {
    Self {
      calories_target: 2000.0,
      protein_target: 150.0,
      carbs_target: 200.0,
      fat_target: 65.0,
      water_target_ml: 2500.0,
    }
  }
}
