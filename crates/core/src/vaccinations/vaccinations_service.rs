use std::sync::Arc;

use chrono::NaiveDate;

use super::vaccinations_model::{NewVaccination, Vaccination, VaccinationDue, VaccinationUpdate};
use super::vaccinations_traits::{VaccinationRepositoryTrait, VaccinationServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing vaccination records.
pub struct VaccinationService {
    repository: Arc<dyn VaccinationRepositoryTrait>,
}

impl VaccinationService {
    /// Creates a new VaccinationService instance.
    pub fn new(repository: Arc<dyn VaccinationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl VaccinationServiceTrait for VaccinationService {
    async fn create_vaccination(
        &self,
        dog_id: &str,
        new_vaccination: NewVaccination,
    ) -> Result<Vaccination> {
        new_vaccination.validate()?;
        self.repository.create(dog_id, new_vaccination).await
    }

    async fn update_vaccination(
        &self,
        dog_id: &str,
        vaccination_id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination> {
        update.validate()?;
        self.repository.update(dog_id, vaccination_id, update).await
    }

    async fn delete_vaccination(&self, dog_id: &str, vaccination_id: &str) -> Result<()> {
        let deleted = self.repository.delete(dog_id, vaccination_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Vaccination not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_vaccinations(&self, dog_id: &str) -> Result<Vec<Vaccination>> {
        self.repository.list_for_dog(dog_id)
    }

    fn due_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<VaccinationDue>> {
        self.repository.due_between(start, end)
    }
}
