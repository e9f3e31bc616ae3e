//! Training session repository and service traits.

use async_trait::async_trait;

use super::training_model::{NewTrainingSession, TrainingSession, TrainingSessionUpdate};
use crate::errors::Result;

/// Trait defining the contract for TrainingSession repository operations.
#[async_trait]
pub trait TrainingRepositoryTrait: Send + Sync {
    /// Creates a training session for the given dog.
    async fn create(&self, dog_id: &str, new_session: NewTrainingSession)
        -> Result<TrainingSession>;

    /// Updates a training session, scoped to the given dog.
    async fn update(
        &self,
        dog_id: &str,
        session_id: &str,
        update: TrainingSessionUpdate,
    ) -> Result<TrainingSession>;

    /// Deletes a training session. Returns the number of deleted records.
    async fn delete(&self, dog_id: &str, session_id: &str) -> Result<usize>;

    /// Lists all training sessions for a dog, ordered by date descending.
    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<TrainingSession>>;
}

/// Trait defining the contract for TrainingSession service operations.
#[async_trait]
pub trait TrainingServiceTrait: Send + Sync {
    /// Logs a training session with business validation.
    async fn create_session(
        &self,
        dog_id: &str,
        new_session: NewTrainingSession,
    ) -> Result<TrainingSession>;

    /// Updates a training session with business validation.
    async fn update_session(
        &self,
        dog_id: &str,
        session_id: &str,
        update: TrainingSessionUpdate,
    ) -> Result<TrainingSession>;

    /// Deletes a training session.
    async fn delete_session(&self, dog_id: &str, session_id: &str) -> Result<()>;

    /// Lists all training sessions for a dog, most recent first.
    fn list_sessions(&self, dog_id: &str) -> Result<Vec<TrainingSession>>;
}
