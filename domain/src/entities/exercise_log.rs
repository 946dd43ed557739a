//! Exercise log aggregate

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::guard;

/// One completed set/rep record inside an `ExerciseLog`. Immutable once
/// appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogEntry {
    exercise_id: Uuid,
    sets: i32,
    reps: i32,
    duration: Option<Duration>,
}

impl ExerciseLogEntry {
    pub fn new(
        exercise_id: Uuid,
        sets: i32,
        reps: i32,
        duration: Option<Duration>,
    ) -> DomainResult<Self> {
        guard::against_nil_id(exercise_id, "exercise_id")?;
        guard::against_negative_or_zero_int(sets, "sets")?;
        guard::against_negative_or_zero_int(reps, "reps")?;
        if let Some(duration) = duration {
            guard::against_negative_duration(duration, "duration")?;
        }

        Ok(Self {
            exercise_id,
            sets,
            reps,
            duration,
        })
    }

    pub fn exercise_id(&self) -> Uuid {
        self.exercise_id
    }

    pub fn sets(&self) -> i32 {
        self.sets
    }

    pub fn reps(&self) -> i32 {
        self.reps
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

/// A record of exercises actually performed in a session.
///
/// Mirrors the Open -> Completed state machine of `Workout`: entries can only
/// be appended while the log is open, and `complete` locks it for good. If no
/// total duration is supplied at completion, the sum of entry durations is
/// used instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    id: Uuid,
    user_id: Uuid,
    name: Option<String>,
    entries: Vec<ExerciseLogEntry>,
    date: NaiveDate,
    duration: Option<Duration>,
    notes: Option<String>,
    is_completed: bool,
}

impl ExerciseLog {
    /// Create an open, empty log for a user on a date.
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
            entries: Vec::new(),
            date,
            duration: None,
            notes: None,
            is_completed: false,
        })
    }

    /// Reconstruct a log from stored fields. For persistence adapters only.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        entries: Vec<ExerciseLogEntry>,
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
            entries,
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

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ExerciseLogEntry] {
        &self.entries
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

    /// Validate and append an entry. Fails once the log is completed.
    pub fn add_entry(
        &mut self,
        exercise_id: Uuid,
        sets: i32,
        reps: i32,
        duration: Option<Duration>,
    ) -> DomainResult<()> {
        let entry = ExerciseLogEntry::new(exercise_id, sets, reps, duration)?;

        if self.is_completed {
            return Err(DomainError::invalid_operation(
                "cannot add entries to a completed log",
            ));
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Transition to Completed. The stored duration is the supplied total or,
    /// if absent, the sum of entry durations. Terminal: completing twice
    /// fails.
    pub fn complete(&mut self, total_duration: Option<Duration>) -> DomainResult<()> {
        if self.is_completed {
            return Err(DomainError::invalid_operation("log is already completed"));
        }

        self.duration = Some(total_duration.unwrap_or_else(|| self.total_duration()));
        self.is_completed = true;
        Ok(())
    }

    /// Sum of entry durations; entries without one contribute zero.
    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .filter_map(|e| e.duration)
            .fold(Duration::zero(), |acc, d| acc + d)
    }

    pub fn update_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
}
