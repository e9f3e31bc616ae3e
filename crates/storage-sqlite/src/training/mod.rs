//! SQLite storage implementation for training sessions.

mod model;
mod repository;

pub use model::{NewTrainingSessionDB, TrainingSessionDB, TrainingSessionUpdateDB};
pub use repository::TrainingRepository;
