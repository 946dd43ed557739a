//! Repository ports
//!
//! Abstract contracts the persistence layer implements. Ports return
//! materialized lists (never a "null collection") in storage order, and point
//! lookups report a miss as `None` rather than an error. Cancellation is
//! drop-based: dropping the returned future aborts the operation with no
//! partial result observed.

use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_domain::Exercise;
use uuid::Uuid;

pub mod memory;

pub use memory::InMemoryExerciseRepository;

/// Lookup contract for the exercise catalog.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// All catalog exercises.
    async fn get_all(&self) -> Result<Vec<Exercise>>;

    /// Exercises whose body part matches `body_part` exactly. The caller
    /// supplies a non-empty string.
    async fn get_by_body_part(&self, body_part: &str) -> Result<Vec<Exercise>>;

    /// Point lookup; `None` on miss.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Exercise>>;
}
