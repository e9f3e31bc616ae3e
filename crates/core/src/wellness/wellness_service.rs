use chrono::{Months, NaiveDate};
use log::debug;
use std::sync::Arc;

use super::wellness_evaluator::evaluate;
use super::wellness_model::HealthStatusReport;
use super::wellness_traits::WellnessServiceTrait;
use crate::appointments::AppointmentRepositoryTrait;
use crate::errors::Result;
use crate::health_records::HealthRecordRepositoryTrait;
use crate::vaccinations::VaccinationRepositoryTrait;

/// Service deriving health-status reports from a dog's stored records.
pub struct WellnessService {
    vaccination_repository: Arc<dyn VaccinationRepositoryTrait>,
    health_record_repository: Arc<dyn HealthRecordRepositoryTrait>,
    appointment_repository: Arc<dyn AppointmentRepositoryTrait>,
}

impl WellnessService {
    /// Creates a new WellnessService instance.
    pub fn new(
        vaccination_repository: Arc<dyn VaccinationRepositoryTrait>,
        health_record_repository: Arc<dyn HealthRecordRepositoryTrait>,
        appointment_repository: Arc<dyn AppointmentRepositoryTrait>,
    ) -> Self {
        Self {
            vaccination_repository,
            health_record_repository,
            appointment_repository,
        }
    }
}

impl WellnessServiceTrait for WellnessService {
    fn health_status(&self, dog_id: &str, today: NaiveDate) -> Result<HealthStatusReport> {
        let vaccinations = self.vaccination_repository.list_for_dog(dog_id)?;
        let health_records = self.health_record_repository.list_for_dog(dog_id)?;
        // The appointment fetch is restricted to the trailing six months; the
        // evaluator scores whatever collection it is handed and does not
        // re-query.
        let appointment_cutoff = today
            .checked_sub_months(Months::new(6))
            .unwrap_or(NaiveDate::MIN);
        let appointments = self
            .appointment_repository
            .list_for_dog_since(dog_id, appointment_cutoff)?;

        debug!(
            "Evaluating health status for dog {}: {} vaccinations, {} health records, {} appointments",
            dog_id,
            vaccinations.len(),
            health_records.len(),
            appointments.len()
        );

        Ok(evaluate(&vaccinations, &health_records, &appointments, today))
    }
}
