use std::sync::Arc;

use super::dogs_model::{Dog, DogUpdate, NewDog};
use super::dogs_traits::{DogRepositoryTrait, DogServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing dogs.
pub struct DogService {
    repository: Arc<dyn DogRepositoryTrait>,
}

impl DogService {
    /// Creates a new DogService instance.
    pub fn new(repository: Arc<dyn DogRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl DogServiceTrait for DogService {
    async fn create_dog(&self, user_id: &str, new_dog: NewDog) -> Result<Dog> {
        new_dog.validate()?;
        self.repository.create(user_id, new_dog).await
    }

    async fn update_dog(&self, user_id: &str, dog_id: &str, update: DogUpdate) -> Result<Dog> {
        update.validate()?;
        self.repository.update(user_id, dog_id, update).await
    }

    async fn delete_dog(&self, user_id: &str, dog_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, dog_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Dog not found".to_string(),
            )));
        }
        Ok(())
    }

    fn get_dog_for_user(&self, dog_id: &str, user_id: &str) -> Result<Dog> {
        self.repository.get_for_user(dog_id, user_id)
    }

    fn list_dogs(&self, user_id: &str) -> Result<Vec<Dog>> {
        self.repository.list_for_user(user_id)
    }
}
