//! Handler for the get-exercise-by-id query

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::dtos::ExerciseDto;
use crate::queries::GetExerciseByIdQuery;
use crate::repositories::ExerciseRepository;

use super::QueryHandler;

/// Serves `GetExerciseByIdQuery` with a single point lookup. A miss is
/// forwarded as `None`, never substituted with a default DTO.
pub struct GetExerciseByIdHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl GetExerciseByIdHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetExerciseByIdQuery> for GetExerciseByIdHandler {
    type Output = Option<ExerciseDto>;

    async fn handle(&self, query: GetExerciseByIdQuery) -> Result<Self::Output> {
        let exercise = self.repository.get_by_id(query.id).await?;
        debug!(id = %query.id, found = exercise.is_some(), "fetched exercise by id");
        Ok(exercise.as_ref().map(ExerciseDto::from))
    }
}
