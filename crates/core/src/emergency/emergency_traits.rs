//! Emergency contact repository and service traits.

use async_trait::async_trait;

use super::emergency_model::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
use crate::errors::Result;

/// Trait defining the contract for EmergencyContact repository operations.
///
/// Contacts are user-scoped, not dog-scoped.
#[async_trait]
pub trait EmergencyContactRepositoryTrait: Send + Sync {
    /// Creates a contact for the given user.
    async fn create(
        &self,
        user_id: &str,
        new_contact: NewEmergencyContact,
    ) -> Result<EmergencyContact>;

    /// Updates a contact, scoped to the given user.
    async fn update(
        &self,
        user_id: &str,
        contact_id: &str,
        update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact>;

    /// Deletes a contact. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, contact_id: &str) -> Result<usize>;

    /// Lists all contacts belonging to the given user.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<EmergencyContact>>;
}

/// Trait defining the contract for EmergencyContact service operations.
#[async_trait]
pub trait EmergencyContactServiceTrait: Send + Sync {
    /// Adds a contact with business validation.
    async fn create_contact(
        &self,
        user_id: &str,
        new_contact: NewEmergencyContact,
    ) -> Result<EmergencyContact>;

    /// Updates a contact with business validation.
    async fn update_contact(
        &self,
        user_id: &str,
        contact_id: &str,
        update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact>;

    /// Deletes a contact.
    async fn delete_contact(&self, user_id: &str, contact_id: &str) -> Result<()>;

    /// Lists all contacts belonging to the given user.
    fn list_contacts(&self, user_id: &str) -> Result<Vec<EmergencyContact>>;
}
