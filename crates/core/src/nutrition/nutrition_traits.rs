//! Nutrition repository and service traits.

use async_trait::async_trait;

use super::nutrition_model::{NewNutritionRecord, NutritionRecord, NutritionRecordUpdate};
use crate::errors::Result;

/// Trait defining the contract for NutritionRecord repository operations.
#[async_trait]
pub trait NutritionRepositoryTrait: Send + Sync {
    /// Creates a nutrition record for the given dog.
    async fn create(&self, dog_id: &str, new_record: NewNutritionRecord)
        -> Result<NutritionRecord>;

    /// Updates a nutrition record, scoped to the given dog.
    async fn update(
        &self,
        dog_id: &str,
        record_id: &str,
        update: NutritionRecordUpdate,
    ) -> Result<NutritionRecord>;

    /// Deletes a nutrition record. Returns the number of deleted records.
    async fn delete(&self, dog_id: &str, record_id: &str) -> Result<usize>;

    /// Lists all nutrition records for a dog, ordered by date descending.
    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<NutritionRecord>>;
}

/// Trait defining the contract for NutritionRecord service operations.
#[async_trait]
pub trait NutritionServiceTrait: Send + Sync {
    /// Adds a nutrition record with business validation.
    async fn create_record(
        &self,
        dog_id: &str,
        new_record: NewNutritionRecord,
    ) -> Result<NutritionRecord>;

    /// Updates a nutrition record with business validation.
    async fn update_record(
        &self,
        dog_id: &str,
        record_id: &str,
        update: NutritionRecordUpdate,
    ) -> Result<NutritionRecord>;

    /// Deletes a nutrition record.
    async fn delete_record(&self, dog_id: &str, record_id: &str) -> Result<()>;

    /// Lists all nutrition records for a dog, most recent first.
    fn list_records(&self, dog_id: &str) -> Result<Vec<NutritionRecord>>;
}
