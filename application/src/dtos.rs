//! Transport-safe data shapes
//!
//! DTOs mirror an aggregate's public scalar fields one-to-one so the mapping
//! stays lossless and reversible. They carry no behavior.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat transport shape for a catalog exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDto {
    pub id: Uuid,
    pub name: String,
    pub body_part: String,
    pub equipment: Option<String>,
    pub target_muscle: String,
    pub gif_url: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_round_trip_through_json() {
        let dto = ExerciseDto {
            id: Uuid::new_v4(),
            name: "Push Up".to_string(),
            body_part: "Chest".to_string(),
            equipment: None,
            target_muscle: "Pectorals".to_string(),
            gif_url: Some("http://example.com/pushup.gif".to_string()),
            description: None,
            difficulty: Some("Medium".to_string()),
        };

        let json = serde_json::to_string(&dto).unwrap();
        let back: ExerciseDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dto);
    }
}
