//! Handler for the get-exercises-by-body-part query

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::dtos::ExerciseDto;
use crate::mapping::to_dtos;
use crate::queries::GetExercisesByBodyPartQuery;
use crate::repositories::ExerciseRepository;

use super::QueryHandler;

/// Serves `GetExercisesByBodyPartQuery` with a single filtered port call.
pub struct GetExercisesByBodyPartHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl GetExercisesByBodyPartHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetExercisesByBodyPartQuery> for GetExercisesByBodyPartHandler {
    type Output = Vec<ExerciseDto>;

    async fn handle(&self, query: GetExercisesByBodyPartQuery) -> Result<Self::Output> {
        let exercises = self.repository.get_by_body_part(&query.body_part).await?;
        debug!(
            body_part = %query.body_part,
            count = exercises.len(),
            "fetched exercises by body part"
        );
        Ok(to_dtos(&exercises))
    }
}
