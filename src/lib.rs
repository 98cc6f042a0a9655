//! MacroLift analytics core
//!
//! Deterministic analytics for a personal training and nutrition tracker.
//! The surrounding app owns CRUD, storage, and rendering; this crate turns a
//! snapshot of raw logs into derived insights: training-cycle position,
//! per-session volume and PR detection, macro trends, an adherence score,
//! and day-based streaks. All computation is synchronous and stateless per
//! call.

pub mod adherence;
pub mod cycle;
pub mod insights;
pub mod models;
pub mod nutrition;
pub mod streaks;
pub mod volume;
pub mod window;

pub use adherence::{Grade, NutritionScore};
pub use cycle::{CycleStatus, WeekStrategy};
pub use insights::{InsightsReport, DEFAULT_WINDOW_DAYS};
pub use models::nutrition::{MealEntry, NutritionGoals, WaterEntry};
pub use models::workout::{ExerciseDefinition, ExerciseEntry, RepRange, WorkoutSession};
pub use nutrition::{DailyNutritionTotals, Macro, MacroTrend, TrendDirection};
pub use streaks::{GoalType, StreakData};
pub use volume::{ExerciseBreakdown, ProcessedSession, SessionAnalyzer};
pub use window::{DayWindow, WindowError};
