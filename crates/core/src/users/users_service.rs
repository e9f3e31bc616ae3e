use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserProfileUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

/// Service for managing user accounts.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance.
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        debug!("Registering user with email: {}", new_user.email);
        self.repository.create(new_user).await
    }

    async fn update_profile(&self, user_id: &str, update: UserProfileUpdate) -> Result<User> {
        update.validate()?;
        self.repository.update_profile(user_id, update).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(email)
    }
}
