//! Dog repository and service traits.

use async_trait::async_trait;

use super::dogs_model::{Dog, DogUpdate, NewDog};
use crate::errors::Result;

/// Trait defining the contract for Dog repository operations.
///
/// Every lookup is scoped by the owning user; a dog that does not exist or
/// belongs to another user surfaces as `DatabaseError::NotFound`.
#[async_trait]
pub trait DogRepositoryTrait: Send + Sync {
    /// Creates a new dog for the given user.
    async fn create(&self, user_id: &str, new_dog: NewDog) -> Result<Dog>;

    /// Updates an existing dog owned by the given user.
    async fn update(&self, user_id: &str, dog_id: &str, update: DogUpdate) -> Result<Dog>;

    /// Deletes a dog owned by the given user. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, dog_id: &str) -> Result<usize>;

    /// Retrieves a dog by ID, scoped to its owner.
    fn get_for_user(&self, dog_id: &str, user_id: &str) -> Result<Dog>;

    /// Lists all dogs belonging to the given user.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Dog>>;
}

/// Trait defining the contract for Dog service operations.
#[async_trait]
pub trait DogServiceTrait: Send + Sync {
    /// Creates a new dog with business validation.
    async fn create_dog(&self, user_id: &str, new_dog: NewDog) -> Result<Dog>;

    /// Updates an existing dog with business validation.
    async fn update_dog(&self, user_id: &str, dog_id: &str, update: DogUpdate) -> Result<Dog>;

    /// Deletes a dog and its dependent records (cascading in storage).
    async fn delete_dog(&self, user_id: &str, dog_id: &str) -> Result<()>;

    /// Retrieves a dog, verifying ownership. This is the ownership gate used
    /// by every per-dog API route.
    fn get_dog_for_user(&self, dog_id: &str, user_id: &str) -> Result<Dog>;

    /// Lists all dogs belonging to the given user.
    fn list_dogs(&self, user_id: &str) -> Result<Vec<Dog>>;
}
