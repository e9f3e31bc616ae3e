//! User repository and service traits.
//!
//! These traits define the contract for user operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::users_model::{NewUser, User, UserProfileUpdate};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user. Fails with a unique violation if the email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Updates a user's profile fields.
    async fn update_profile(&self, user_id: &str, update: UserProfileUpdate) -> Result<User>;

    /// Retrieves a user by ID.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by email, if one exists.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user with business validation.
    async fn register(&self, new_user: NewUser) -> Result<User>;

    /// Updates a user's profile with business validation.
    async fn update_profile(&self, user_id: &str, update: UserProfileUpdate) -> Result<User>;

    /// Retrieves a user by ID.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by email, if one exists.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
