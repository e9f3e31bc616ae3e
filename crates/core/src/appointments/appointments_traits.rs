//! Appointment repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::appointments_model::{
    Appointment, AppointmentReminder, AppointmentUpdate, NewAppointment,
};
use crate::errors::Result;

/// Trait defining the contract for Appointment repository operations.
#[async_trait]
pub trait AppointmentRepositoryTrait: Send + Sync {
    /// Creates an appointment for the given dog.
    async fn create(&self, dog_id: &str, new_appointment: NewAppointment) -> Result<Appointment>;

    /// Updates an appointment, scoped to the given dog.
    async fn update(
        &self,
        dog_id: &str,
        appointment_id: &str,
        update: AppointmentUpdate,
    ) -> Result<Appointment>;

    /// Deletes an appointment. Returns the number of deleted records.
    async fn delete(&self, dog_id: &str, appointment_id: &str) -> Result<usize>;

    /// Lists all appointments for a dog, ordered by date then time.
    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<Appointment>>;

    /// Lists appointments for a dog dated on or after the given date.
    fn list_for_dog_since(&self, dog_id: &str, from: NaiveDate) -> Result<Vec<Appointment>>;

    /// Lists reminder-enabled appointments on the given date, joined with dog
    /// and owner details for reminder emails.
    fn reminders_for_date(&self, date: NaiveDate) -> Result<Vec<AppointmentReminder>>;
}

/// Trait defining the contract for Appointment service operations.
#[async_trait]
pub trait AppointmentServiceTrait: Send + Sync {
    /// Schedules an appointment with business validation.
    async fn create_appointment(
        &self,
        dog_id: &str,
        new_appointment: NewAppointment,
    ) -> Result<Appointment>;

    /// Updates an appointment with business validation.
    async fn update_appointment(
        &self,
        dog_id: &str,
        appointment_id: &str,
        update: AppointmentUpdate,
    ) -> Result<Appointment>;

    /// Deletes an appointment.
    async fn delete_appointment(&self, dog_id: &str, appointment_id: &str) -> Result<()>;

    /// Lists all appointments for a dog.
    fn list_appointments(&self, dog_id: &str) -> Result<Vec<Appointment>>;

    /// Lists appointments for a dog dated on or after the given date.
    fn list_appointments_since(&self, dog_id: &str, from: NaiveDate) -> Result<Vec<Appointment>>;

    /// Lists reminder candidates for the given date.
    fn reminders_for_date(&self, date: NaiveDate) -> Result<Vec<AppointmentReminder>>;
}
