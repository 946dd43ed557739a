//! Aggregate <-> DTO mapping
//!
//! Explicit, statically checked field-to-field transforms. The forward
//! direction (aggregate to DTO) is infallible; the reverse direction funnels
//! through the validated constructor, so a DTO carrying blank required fields
//! can never materialize an invalid aggregate.

use exercise_tracker_domain::{DomainError, Exercise};

use crate::dtos::ExerciseDto;

impl From<&Exercise> for ExerciseDto {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id(),
            name: exercise.name().to_string(),
            body_part: exercise.body_part().to_string(),
            equipment: exercise.equipment().map(str::to_string),
            target_muscle: exercise.target_muscle().to_string(),
            gif_url: exercise.gif_url().map(str::to_string),
            description: exercise.description().map(str::to_string),
            difficulty: exercise.difficulty().map(str::to_string),
        }
    }
}

impl From<Exercise> for ExerciseDto {
    fn from(exercise: Exercise) -> Self {
        Self::from(&exercise)
    }
}

impl TryFrom<ExerciseDto> for Exercise {
    type Error = DomainError;

    fn try_from(dto: ExerciseDto) -> Result<Self, Self::Error> {
        Exercise::new(
            dto.id,
            dto.name,
            dto.body_part,
            dto.target_muscle,
            dto.equipment,
            dto.gif_url,
            dto.description,
            dto.difficulty,
        )
    }
}

/// Map a batch of exercises, preserving order.
pub fn to_dtos(exercises: &[Exercise]) -> Vec<ExerciseDto> {
    exercises.iter().map(ExerciseDto::from).collect()
}
