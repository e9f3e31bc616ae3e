//! Emergency contact domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Kind of emergency contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactType {
    Vet,
    EmergencyVet,
    PoisonControl,
    #[default]
    Other,
}

impl ContactType {
    /// Returns the wire/storage representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Vet => "vet",
            ContactType::EmergencyVet => "emergency-vet",
            ContactType::PoisonControl => "poison-control",
            ContactType::Other => "other",
        }
    }

    /// Parses a stored string; unknown values map to `Other`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "vet" => ContactType::Vet,
            "emergency-vet" => ContactType::EmergencyVet,
            "poison-control" => ContactType::PoisonControl,
            _ => ContactType::Other,
        }
    }
}

/// Domain model representing an emergency contact saved by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub phone: String,
    pub address: Option<String>,
    #[serde(rename = "available24h")]
    pub available_24h: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for adding an emergency contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmergencyContact {
    pub name: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub phone: String,
    pub address: Option<String>,
    #[serde(rename = "available24h", default)]
    pub available_24h: bool,
}

impl NewEmergencyContact {
    /// Validates the emergency contact data.
    pub fn validate(&self) -> Result<()> {
        validate_contact_fields(&self.name, &self.phone)
    }
}

/// Input model for updating an emergency contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactUpdate {
    pub name: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub phone: String,
    pub address: Option<String>,
    #[serde(rename = "available24h", default)]
    pub available_24h: bool,
}

impl EmergencyContactUpdate {
    /// Validates the emergency contact update data.
    pub fn validate(&self) -> Result<()> {
        validate_contact_fields(&self.name, &self.phone)
    }
}

fn validate_contact_fields(name: &str, phone: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Name is required".to_string(),
        )));
    }
    if phone.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Valid phone number required".to_string(),
        )));
    }
    Ok(())
}
