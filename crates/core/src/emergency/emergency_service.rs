use std::sync::Arc;

use super::emergency_model::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
use super::emergency_traits::{EmergencyContactRepositoryTrait, EmergencyContactServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing emergency contacts.
pub struct EmergencyContactService {
    repository: Arc<dyn EmergencyContactRepositoryTrait>,
}

impl EmergencyContactService {
    /// Creates a new EmergencyContactService instance.
    pub fn new(repository: Arc<dyn EmergencyContactRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl EmergencyContactServiceTrait for EmergencyContactService {
    async fn create_contact(
        &self,
        user_id: &str,
        new_contact: NewEmergencyContact,
    ) -> Result<EmergencyContact> {
        new_contact.validate()?;
        self.repository.create(user_id, new_contact).await
    }

    async fn update_contact(
        &self,
        user_id: &str,
        contact_id: &str,
        update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact> {
        update.validate()?;
        self.repository.update(user_id, contact_id, update).await
    }

    async fn delete_contact(&self, user_id: &str, contact_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, contact_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Emergency contact not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_contacts(&self, user_id: &str) -> Result<Vec<EmergencyContact>> {
        self.repository.list_for_user(user_id)
    }
}
