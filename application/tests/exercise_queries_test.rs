//! End-to-end tests for the exercise query pipeline
//!
//! Drives each handler against the in-memory repository adapter and checks
//! the DTOs coming out the other side.

use std::sync::Arc;

use exercise_tracker_application::{
    GetAllExercisesHandler, GetAllExercisesQuery, GetExerciseByIdHandler, GetExerciseByIdQuery,
    GetExercisesByBodyPartHandler, GetExercisesByBodyPartQuery, QueryHandler,
};
use exercise_tracker_application::repositories::InMemoryExerciseRepository;
use exercise_tracker_domain::Exercise;
use uuid::Uuid;

fn catalog() -> Vec<Exercise> {
    vec![
        Exercise::new(
            Uuid::new_v4(),
            "Push Up",
            "Chest",
            "Pectorals",
            None,
            Some("http://example.com/pushup.gif".to_string()),
            Some("A basic push-up exercise.".to_string()),
            Some("Medium".to_string()),
        )
        .unwrap(),
        Exercise::new(
            Uuid::new_v4(),
            "Squat",
            "Legs",
            "Quadriceps",
            None,
            Some("http://example.com/squat.gif".to_string()),
            Some("A basic squat exercise.".to_string()),
            Some("Medium".to_string()),
        )
        .unwrap(),
    ]
}

#[tokio::test]
async fn get_all_returns_dtos_in_repository_order() {
    let repo = Arc::new(InMemoryExerciseRepository::new(catalog()));
    let handler = GetAllExercisesHandler::new(repo.clone());

    let result = handler.handle(GetAllExercisesQuery).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "Push Up");
    assert_eq!(result[0].body_part, "Chest");
    assert_eq!(result[1].name, "Squat");
    assert_eq!(result[1].body_part, "Legs");
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn get_all_with_an_empty_catalog_yields_an_empty_list() {
    let repo = Arc::new(InMemoryExerciseRepository::default());
    let handler = GetAllExercisesHandler::new(repo.clone());

    let result = handler.handle(GetAllExercisesQuery).await.unwrap();

    assert!(result.is_empty());
    // Exactly one repository call was made
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn body_part_filter_only_returns_matches() {
    let repo = Arc::new(InMemoryExerciseRepository::new(catalog()));
    let handler = GetExercisesByBodyPartHandler::new(repo.clone());

    let result = handler
        .handle(GetExercisesByBodyPartQuery {
            body_part: "Legs".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Squat");
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn body_part_with_no_matches_yields_an_empty_list() {
    let repo = Arc::new(InMemoryExerciseRepository::new(catalog()));
    let handler = GetExercisesByBodyPartHandler::new(repo);

    let result = handler
        .handle(GetExercisesByBodyPartQuery {
            body_part: "Back".to_string(),
        })
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn get_by_id_returns_the_matching_dto() {
    let exercises = catalog();
    let squat_id = exercises[1].id();
    let repo = Arc::new(InMemoryExerciseRepository::new(exercises));
    let handler = GetExerciseByIdHandler::new(repo.clone());

    let result = handler
        .handle(GetExerciseByIdQuery { id: squat_id })
        .await
        .unwrap();

    let dto = result.expect("exercise should be found");
    assert_eq!(dto.id, squat_id);
    assert_eq!(dto.name, "Squat");
    assert_eq!(dto.target_muscle, "Quadriceps");
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn get_by_id_miss_is_none_not_an_error() {
    let repo = Arc::new(InMemoryExerciseRepository::new(catalog()));
    let handler = GetExerciseByIdHandler::new(repo);

    let result = handler
        .handle(GetExerciseByIdQuery { id: Uuid::new_v4() })
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn repository_failures_propagate_unwrapped() {
    use anyhow::anyhow;
    use async_trait::async_trait;
    use exercise_tracker_application::ExerciseRepository;

    struct FailingRepository;

    #[async_trait]
    impl ExerciseRepository for FailingRepository {
        async fn get_all(&self) -> anyhow::Result<Vec<Exercise>> {
            Err(anyhow!("storage unavailable"))
        }

        async fn get_by_body_part(&self, _body_part: &str) -> anyhow::Result<Vec<Exercise>> {
            Err(anyhow!("storage unavailable"))
        }

        async fn get_by_id(&self, _id: Uuid) -> anyhow::Result<Option<Exercise>> {
            Err(anyhow!("storage unavailable"))
        }
    }

    let handler = GetAllExercisesHandler::new(Arc::new(FailingRepository));
    let result = handler.handle(GetAllExercisesQuery).await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "storage unavailable");
}
