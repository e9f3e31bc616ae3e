//! Vaccination domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one administered vaccine dose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    pub id: String,
    pub dog_id: String,
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub date_given: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: String,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a vaccination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVaccination {
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub date_given: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: String,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
}

impl NewVaccination {
    /// Validates the vaccination data.
    pub fn validate(&self) -> Result<()> {
        validate_vaccination_fields(&self.vaccine_name, &self.vaccine_type, &self.veterinarian)
    }
}

/// Input model for updating an existing vaccination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationUpdate {
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub date_given: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: String,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
}

impl VaccinationUpdate {
    /// Validates the vaccination update data.
    pub fn validate(&self) -> Result<()> {
        validate_vaccination_fields(&self.vaccine_name, &self.vaccine_type, &self.veterinarian)
    }
}

fn validate_vaccination_fields(name: &str, vaccine_type: &str, veterinarian: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Vaccine name is required".to_string(),
        )));
    }
    if vaccine_type.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Vaccine type is required".to_string(),
        )));
    }
    if veterinarian.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Veterinarian is required".to_string(),
        )));
    }
    Ok(())
}

/// A vaccination approaching its due date, joined with owner contact details
/// for the reminder scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationDue {
    pub vaccination_id: String,
    pub vaccine_name: String,
    pub next_due_date: NaiveDate,
    pub dog_name: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_language: String,
}
