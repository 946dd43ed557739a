//! Typed read requests
//!
//! Pure data, no behavior. The outer HTTP layer builds one of these from path
//! or query parameters and hands it to the matching handler.

use serde::Deserialize;
use uuid::Uuid;

/// Fetch the whole exercise catalog.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GetAllExercisesQuery;

/// Fetch the exercises targeting one body part.
#[derive(Debug, Clone, Deserialize)]
pub struct GetExercisesByBodyPartQuery {
    pub body_part: String,
}

/// Fetch a single exercise by id.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetExerciseByIdQuery {
    pub id: Uuid,
}
