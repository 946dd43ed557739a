//! In-memory repository adapter
//!
//! Backs the handler tests and serves as the reference implementation of the
//! port contract. Call counts are tracked so tests can assert a handler makes
//! exactly one repository call.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_domain::Exercise;
use uuid::Uuid;

use super::ExerciseRepository;

/// A catalog held in an owned `Vec`, returned in insertion order.
#[derive(Default)]
pub struct InMemoryExerciseRepository {
    exercises: Vec<Exercise>,
    calls: AtomicUsize,
}

impl InMemoryExerciseRepository {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of port calls made against this repository.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn get_all(&self) -> Result<Vec<Exercise>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exercises.clone())
    }

    async fn get_by_body_part(&self, body_part: &str) -> Result<Vec<Exercise>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .exercises
            .iter()
            .filter(|e| e.body_part() == body_part)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Exercise>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exercises.iter().find(|e| e.id() == id).cloned())
    }
}
