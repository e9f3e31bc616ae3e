use std::sync::Arc;

use super::training_model::{NewTrainingSession, TrainingSession, TrainingSessionUpdate};
use super::training_traits::{TrainingRepositoryTrait, TrainingServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing training sessions.
pub struct TrainingService {
    repository: Arc<dyn TrainingRepositoryTrait>,
}

impl TrainingService {
    /// Creates a new TrainingService instance.
    pub fn new(repository: Arc<dyn TrainingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TrainingServiceTrait for TrainingService {
    async fn create_session(
        &self,
        dog_id: &str,
        new_session: NewTrainingSession,
    ) -> Result<TrainingSession> {
        new_session.validate()?;
        self.repository.create(dog_id, new_session).await
    }

    async fn update_session(
        &self,
        dog_id: &str,
        session_id: &str,
        update: TrainingSessionUpdate,
    ) -> Result<TrainingSession> {
        update.validate()?;
        self.repository.update(dog_id, session_id, update).await
    }

    async fn delete_session(&self, dog_id: &str, session_id: &str) -> Result<()> {
        let deleted = self.repository.delete(dog_id, session_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Training session not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_sessions(&self, dog_id: &str) -> Result<Vec<TrainingSession>> {
        self.repository.list_for_dog(dog_id)
    }
}
