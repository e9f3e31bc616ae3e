use std::sync::Arc;

use super::nutrition_model::{NewNutritionRecord, NutritionRecord, NutritionRecordUpdate};
use super::nutrition_traits::{NutritionRepositoryTrait, NutritionServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing nutrition records.
pub struct NutritionService {
    repository: Arc<dyn NutritionRepositoryTrait>,
}

impl NutritionService {
    /// Creates a new NutritionService instance.
    pub fn new(repository: Arc<dyn NutritionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl NutritionServiceTrait for NutritionService {
    async fn create_record(
        &self,
        dog_id: &str,
        new_record: NewNutritionRecord,
    ) -> Result<NutritionRecord> {
        new_record.validate()?;
        self.repository.create(dog_id, new_record).await
    }

    async fn update_record(
        &self,
        dog_id: &str,
        record_id: &str,
        update: NutritionRecordUpdate,
    ) -> Result<NutritionRecord> {
        update.validate()?;
        self.repository.update(dog_id, record_id, update).await
    }

    async fn delete_record(&self, dog_id: &str, record_id: &str) -> Result<()> {
        let deleted = self.repository.delete(dog_id, record_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Nutrition record not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_records(&self, dog_id: &str) -> Result<Vec<NutritionRecord>> {
        self.repository.list_for_dog(dog_id)
    }
}
