pub mod nutrition;
pub mod workout;

pub use nutrition::{MealEntry, NutritionGoals, WaterEntry};
pub use workout::{ExerciseDefinition, ExerciseEntry, RepRange, WorkoutSession};
