//! Exercise Tracker Application Library
//!
//! The read pipeline over the domain crate: repository ports, typed queries,
//! their one-to-one handlers, and the mapping between aggregates and
//! transport DTOs. HTTP routing, persistence engines, and authentication live
//! outside this crate and plug into the ports defined here.

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod queries;
pub mod repositories;

pub use dtos::ExerciseDto;
pub use handlers::{
    GetAllExercisesHandler, GetExerciseByIdHandler, GetExercisesByBodyPartHandler, QueryHandler,
};
pub use queries::{GetAllExercisesQuery, GetExerciseByIdQuery, GetExercisesByBodyPartQuery};
pub use repositories::ExerciseRepository;
