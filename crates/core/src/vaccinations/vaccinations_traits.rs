//! Vaccination repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::vaccinations_model::{NewVaccination, Vaccination, VaccinationDue, VaccinationUpdate};
use crate::errors::Result;

/// Trait defining the contract for Vaccination repository operations.
#[async_trait]
pub trait VaccinationRepositoryTrait: Send + Sync {
    /// Creates a vaccination record for the given dog.
    async fn create(&self, dog_id: &str, new_vaccination: NewVaccination) -> Result<Vaccination>;

    /// Updates a vaccination record, scoped to the given dog.
    async fn update(
        &self,
        dog_id: &str,
        vaccination_id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination>;

    /// Deletes a vaccination record. Returns the number of deleted records.
    async fn delete(&self, dog_id: &str, vaccination_id: &str) -> Result<usize>;

    /// Lists all vaccinations for a dog, ordered by date given descending.
    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<Vaccination>>;

    /// Lists vaccinations with a next due date inside the given window,
    /// joined with dog and owner details for reminder emails.
    fn due_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<VaccinationDue>>;
}

/// Trait defining the contract for Vaccination service operations.
#[async_trait]
pub trait VaccinationServiceTrait: Send + Sync {
    /// Records a vaccination with business validation.
    async fn create_vaccination(
        &self,
        dog_id: &str,
        new_vaccination: NewVaccination,
    ) -> Result<Vaccination>;

    /// Updates a vaccination with business validation.
    async fn update_vaccination(
        &self,
        dog_id: &str,
        vaccination_id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination>;

    /// Deletes a vaccination record.
    async fn delete_vaccination(&self, dog_id: &str, vaccination_id: &str) -> Result<()>;

    /// Lists all vaccinations for a dog, most recent first.
    fn list_vaccinations(&self, dog_id: &str) -> Result<Vec<Vaccination>>;

    /// Lists vaccinations due inside the given window for reminders.
    fn due_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<VaccinationDue>>;
}
