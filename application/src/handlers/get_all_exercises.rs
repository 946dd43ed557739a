//! Handler for the get-all-exercises query

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::dtos::ExerciseDto;
use crate::mapping::to_dtos;
use crate::queries::GetAllExercisesQuery;
use crate::repositories::ExerciseRepository;

use super::QueryHandler;

/// Serves `GetAllExercisesQuery` with a single `get_all` port call.
pub struct GetAllExercisesHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl GetAllExercisesHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetAllExercisesQuery> for GetAllExercisesHandler {
    type Output = Vec<ExerciseDto>;

    async fn handle(&self, _query: GetAllExercisesQuery) -> Result<Self::Output> {
        let exercises = self.repository.get_all().await?;
        debug!(count = exercises.len(), "fetched exercise catalog");
        Ok(to_dtos(&exercises))
    }
}
