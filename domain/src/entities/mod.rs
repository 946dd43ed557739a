//! Domain entities and aggregates
//!
//! Every constructor and mutator runs its guard clauses before touching any
//! field, so a rejected call leaves the aggregate exactly as it was.

pub mod analytics;
pub mod exercise;
pub mod exercise_log;
pub mod user;
pub mod workout;
pub mod workout_plan;

pub use analytics::Analytics;
pub use exercise::Exercise;
pub use exercise_log::{ExerciseLog, ExerciseLogEntry};
pub use user::User;
pub use workout::Workout;
pub use workout_plan::WorkoutPlan;
