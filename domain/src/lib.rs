//! Exercise Tracker Domain Library
//!
//! Validated aggregates, unit-safe value objects, and the guard clauses that
//! enforce their invariants. This crate is pure domain logic: no async, no
//! I/O, no transport concerns.

pub mod entities;
pub mod errors;
pub mod guard;
pub mod units;

// Re-export commonly used items
pub use entities::{
    Analytics, Exercise, ExerciseLog, ExerciseLogEntry, User, Workout, WorkoutPlan,
};
pub use errors::{DomainError, DomainResult};
pub use units::{Height, Weight};
