//! Exercise reference entity

use uuid::Uuid;

use crate::errors::DomainResult;
use crate::guard;

/// A catalog exercise: reference data imported once and effectively immutable
/// afterwards, except for the description and gif-url touch-ups the catalog
/// import occasionally re-runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: Uuid,
    name: String,
    body_part: String,
    target_muscle: String,
    equipment: Option<String>,
    gif_url: Option<String>,
    description: Option<String>,
    difficulty: Option<String>,
}

impl Exercise {
    /// Validated constructor: id must be non-nil, name/body-part/target-muscle
    /// non-blank. The optional fields are accepted as-is.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        body_part: impl Into<String>,
        target_muscle: impl Into<String>,
        equipment: Option<String>,
        gif_url: Option<String>,
        description: Option<String>,
        difficulty: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let body_part = body_part.into();
        let target_muscle = target_muscle.into();

        guard::against_nil_id(id, "id")?;
        guard::against_blank(&name, "name")?;
        guard::against_blank(&body_part, "body_part")?;
        guard::against_blank(&target_muscle, "target_muscle")?;

        Ok(Self {
            id,
            name,
            body_part,
            target_muscle,
            equipment,
            gif_url,
            description,
            difficulty,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body_part(&self) -> &str {
        &self.body_part
    }

    pub fn target_muscle(&self) -> &str {
        &self.target_muscle
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    pub fn gif_url(&self) -> Option<&str> {
        self.gif_url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// True iff the equipment field is present and non-blank.
    pub fn requires_equipment(&self) -> bool {
        self.equipment
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn update_gif_url(&mut self, gif_url: Option<String>) {
        self.gif_url = gif_url;
    }
}
