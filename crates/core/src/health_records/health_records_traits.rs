//! Health record repository and service traits.

use async_trait::async_trait;

use super::health_records_model::{HealthRecord, HealthRecordUpdate, NewHealthRecord};
use crate::errors::Result;

/// Trait defining the contract for HealthRecord repository operations.
#[async_trait]
pub trait HealthRecordRepositoryTrait: Send + Sync {
    /// Creates a health record for the given dog.
    async fn create(&self, dog_id: &str, new_record: NewHealthRecord) -> Result<HealthRecord>;

    /// Updates a health record, scoped to the given dog.
    async fn update(
        &self,
        dog_id: &str,
        record_id: &str,
        update: HealthRecordUpdate,
    ) -> Result<HealthRecord>;

    /// Deletes a health record. Returns the number of deleted records.
    async fn delete(&self, dog_id: &str, record_id: &str) -> Result<usize>;

    /// Lists all health records for a dog, ordered by date descending.
    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<HealthRecord>>;
}

/// Trait defining the contract for HealthRecord service operations.
#[async_trait]
pub trait HealthRecordServiceTrait: Send + Sync {
    /// Logs a health event with business validation.
    async fn create_health_record(
        &self,
        dog_id: &str,
        new_record: NewHealthRecord,
    ) -> Result<HealthRecord>;

    /// Updates a health event with business validation.
    async fn update_health_record(
        &self,
        dog_id: &str,
        record_id: &str,
        update: HealthRecordUpdate,
    ) -> Result<HealthRecord>;

    /// Deletes a health event.
    async fn delete_health_record(&self, dog_id: &str, record_id: &str) -> Result<()>;

    /// Lists all health records for a dog, most recent first.
    fn list_health_records(&self, dog_id: &str) -> Result<Vec<HealthRecord>>;
}
