use std::sync::Arc;

use super::health_records_model::{HealthRecord, HealthRecordUpdate, NewHealthRecord};
use super::health_records_traits::{HealthRecordRepositoryTrait, HealthRecordServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing health records.
pub struct HealthRecordService {
    repository: Arc<dyn HealthRecordRepositoryTrait>,
}

impl HealthRecordService {
    /// Creates a new HealthRecordService instance.
    pub fn new(repository: Arc<dyn HealthRecordRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl HealthRecordServiceTrait for HealthRecordService {
    async fn create_health_record(
        &self,
        dog_id: &str,
        new_record: NewHealthRecord,
    ) -> Result<HealthRecord> {
        new_record.validate()?;
        self.repository.create(dog_id, new_record).await
    }

    async fn update_health_record(
        &self,
        dog_id: &str,
        record_id: &str,
        update: HealthRecordUpdate,
    ) -> Result<HealthRecord> {
        update.validate()?;
        self.repository.update(dog_id, record_id, update).await
    }

    async fn delete_health_record(&self, dog_id: &str, record_id: &str) -> Result<()> {
        let deleted = self.repository.delete(dog_id, record_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Health record not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_health_records(&self, dog_id: &str) -> Result<Vec<HealthRecord>> {
        self.repository.list_for_dog(dog_id)
    }
}
