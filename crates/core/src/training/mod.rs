//! Training sessions module - domain models, services, and traits.

mod training_model;
mod training_service;
mod training_traits;

pub use training_model::{NewTrainingSession, TrainingProgress, TrainingSession, TrainingSessionUpdate};
pub use training_service::TrainingService;
pub use training_traits::{TrainingRepositoryTrait, TrainingServiceTrait};
