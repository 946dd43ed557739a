//! Query handlers
//!
//! One handler per query type. Each handler makes exactly one repository call
//! and one mapping pass; business rules live in the domain crate, and domain
//! errors propagate untouched to the outer boundary.

use anyhow::Result;
use async_trait::async_trait;

pub mod get_all_exercises;
pub mod get_exercise_by_id;
pub mod get_exercises_by_body_part;

pub use get_all_exercises::GetAllExercisesHandler;
pub use get_exercise_by_id::GetExerciseByIdHandler;
pub use get_exercises_by_body_part::GetExercisesByBodyPartHandler;

/// The pairing between a query type and the handler that serves it. Explicit
/// per-query implementations replace type-keyed runtime dispatch.
#[async_trait]
pub trait QueryHandler<Q>: Send + Sync {
    type Output;

    async fn handle(&self, query: Q) -> Result<Self::Output>;
}
