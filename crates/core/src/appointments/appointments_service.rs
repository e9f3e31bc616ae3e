use std::sync::Arc;

use chrono::NaiveDate;

use super::appointments_model::{
    Appointment, AppointmentReminder, AppointmentUpdate, NewAppointment,
};
use super::appointments_traits::{AppointmentRepositoryTrait, AppointmentServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing appointments.
pub struct AppointmentService {
    repository: Arc<dyn AppointmentRepositoryTrait>,
}

impl AppointmentService {
    /// Creates a new AppointmentService instance.
    pub fn new(repository: Arc<dyn AppointmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AppointmentServiceTrait for AppointmentService {
    async fn create_appointment(
        &self,
        dog_id: &str,
        new_appointment: NewAppointment,
    ) -> Result<Appointment> {
        new_appointment.validate()?;
        self.repository.create(dog_id, new_appointment).await
    }

    async fn update_appointment(
        &self,
        dog_id: &str,
        appointment_id: &str,
        update: AppointmentUpdate,
    ) -> Result<Appointment> {
        update.validate()?;
        self.repository.update(dog_id, appointment_id, update).await
    }

    async fn delete_appointment(&self, dog_id: &str, appointment_id: &str) -> Result<()> {
        let deleted = self.repository.delete(dog_id, appointment_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(
                "Appointment not found".to_string(),
            )));
        }
        Ok(())
    }

    fn list_appointments(&self, dog_id: &str) -> Result<Vec<Appointment>> {
        self.repository.list_for_dog(dog_id)
    }

    fn list_appointments_since(&self, dog_id: &str, from: NaiveDate) -> Result<Vec<Appointment>> {
        self.repository.list_for_dog_since(dog_id, from)
    }

    fn reminders_for_date(&self, date: NaiveDate) -> Result<Vec<AppointmentReminder>> {
        self.repository.reminders_for_date(date)
    }
}
