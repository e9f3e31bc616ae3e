//! Appointment domain models.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMINDER_MINUTES;
use crate::{errors::ValidationError, Error, Result};

/// Category of a scheduled appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    Vet,
    Grooming,
    Training,
    Walk,
    Feeding,
    #[default]
    Other,
}

impl AppointmentType {
    /// Returns the wire/storage representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Vet => "vet",
            AppointmentType::Grooming => "grooming",
            AppointmentType::Training => "training",
            AppointmentType::Walk => "walk",
            AppointmentType::Feeding => "feeding",
            AppointmentType::Other => "other",
        }
    }

    /// Parses a stored string; unknown values map to `Other`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "vet" => AppointmentType::Vet,
            "grooming" => AppointmentType::Grooming,
            "training" => AppointmentType::Training,
            "walk" => AppointmentType::Walk,
            "feeding" => AppointmentType::Feeding,
            _ => AppointmentType::Other,
        }
    }
}

/// Domain model representing a scheduled appointment for a dog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub dog_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Whether a reminder email should be sent before the appointment.
    pub reminder: bool,
    /// Reminder lead time in minutes before the appointment start.
    pub reminder_time: i32,
    pub created_at: NaiveDateTime,
}

/// Input model for scheduling an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub title: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(default = "default_reminder")]
    pub reminder: bool,
    #[serde(default = "default_reminder_time")]
    pub reminder_time: i32,
}

fn default_reminder() -> bool {
    true
}

fn default_reminder_time() -> i32 {
    DEFAULT_REMINDER_MINUTES
}

impl NewAppointment {
    /// Validates the appointment data.
    pub fn validate(&self) -> Result<()> {
        validate_appointment_fields(&self.title, self.reminder_time)
    }
}

/// Input model for updating an existing appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub title: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(default = "default_reminder")]
    pub reminder: bool,
    #[serde(default = "default_reminder_time")]
    pub reminder_time: i32,
}

impl AppointmentUpdate {
    /// Validates the appointment update data.
    pub fn validate(&self) -> Result<()> {
        validate_appointment_fields(&self.title, self.reminder_time)
    }
}

fn validate_appointment_fields(title: &str, reminder_time: i32) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Title is required".to_string(),
        )));
    }
    if reminder_time < 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Reminder lead time cannot be negative".to_string(),
        )));
    }
    Ok(())
}

/// An appointment that may need a reminder, joined with dog and owner details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentReminder {
    pub appointment_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reminder_time: i32,
    pub dog_name: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_language: String,
}
