//! Workout aggregate

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::entities::exercise::Exercise;
use crate::errors::{DomainError, DomainResult};
use crate::guard;

/// A single training session: an ordered list of catalog exercises performed
/// on a date.
///
/// State machine: Open (initial) -> Completed (terminal). The exercise list
/// can only change while the workout is open; `complete` stores the duration
/// exactly once and locks the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: Uuid,
    user_id: Uuid,
    name: Option<String>,
    exercises: Vec<Exercise>,
    date: NaiveDate,
    duration: Option<Duration>,
    notes: Option<String>,
    is_completed: bool,
}

impl Workout {
    /// Create an open, empty workout for a user on a date.
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;

        Ok(Self {
            id,
            user_id,
            name,
            exercises: Vec::new(),
            date,
            duration: None,
            notes: None,
            is_completed: false,
        })
    }

    /// Reconstruct a workout from stored fields. For persistence adapters
    /// only; this is the sole path that can restore a completed workout.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        exercises: Vec<Exercise>,
        date: NaiveDate,
        duration: Option<Duration>,
        notes: Option<String>,
        is_completed: bool,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;

        Ok(Self {
            id,
            user_id,
            name,
            exercises,
            date,
            duration,
            notes,
            is_completed,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Exercises in insertion order. The backing list is never exposed
    /// mutably.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Append an exercise. Idempotent by exercise id: adding an id already in
    /// the list is a silent no-op. Fails once the workout is completed.
    pub fn add_exercise(&mut self, exercise: Exercise) -> DomainResult<()> {
        if self.is_completed {
            return Err(DomainError::invalid_operation(
                "cannot add exercises to a completed workout",
            ));
        }

        if self.exercises.iter().any(|e| e.id() == exercise.id()) {
            return Ok(());
        }

        self.exercises.push(exercise);
        Ok(())
    }

    /// Detach an exercise by id. Removing an absent id is a silent no-op.
    /// Fails once the workout is completed.
    pub fn remove_exercise(&mut self, exercise_id: Uuid) -> DomainResult<()> {
        guard::against_nil_id(exercise_id, "exercise_id")?;

        if self.is_completed {
            return Err(DomainError::invalid_operation(
                "cannot remove exercises from a completed workout",
            ));
        }

        self.exercises.retain(|e| e.id() != exercise_id);
        Ok(())
    }

    /// Transition to Completed, storing the (positive) session duration.
    /// Terminal: completing twice fails.
    pub fn complete(&mut self, duration: Duration) -> DomainResult<()> {
        if self.is_completed {
            return Err(DomainError::invalid_operation(
                "workout is already completed",
            ));
        }

        guard::against_non_positive_duration(duration, "duration")?;

        self.duration = Some(duration);
        self.is_completed = true;
        Ok(())
    }

    /// Notes are freely editable in any state.
    pub fn update_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
}
