//! Health record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Kind of health event recorded for a dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HealthRecordType {
    VetVisit,
    Medication,
    Illness,
    Injury,
    #[default]
    Other,
}

impl HealthRecordType {
    /// Returns the wire/storage representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRecordType::VetVisit => "vet-visit",
            HealthRecordType::Medication => "medication",
            HealthRecordType::Illness => "illness",
            HealthRecordType::Injury => "injury",
            HealthRecordType::Other => "other",
        }
    }

    /// Parses a stored string back into a record type.
    ///
    /// Unknown values map to `Other` so that a widened check constraint in a
    /// future migration cannot break reads.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "vet-visit" => HealthRecordType::VetVisit,
            "medication" => HealthRecordType::Medication,
            "illness" => HealthRecordType::Illness,
            "injury" => HealthRecordType::Injury,
            _ => HealthRecordType::Other,
        }
    }

    /// Whether this record type counts as an illness signal for scoring.
    pub fn is_illness(&self) -> bool {
        matches!(self, HealthRecordType::Illness | HealthRecordType::Injury)
    }
}

impl std::fmt::Display for HealthRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing one health event in a dog's log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for logging a health event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
}

impl NewHealthRecord {
    /// Validates the health record data.
    pub fn validate(&self) -> Result<()> {
        validate_health_record_fields(&self.title, &self.description)
    }
}

/// Input model for updating a health event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordUpdate {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
}

impl HealthRecordUpdate {
    /// Validates the health record update data.
    pub fn validate(&self) -> Result<()> {
        validate_health_record_fields(&self.title, &self.description)
    }
}

fn validate_health_record_fields(title: &str, description: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Title is required".to_string(),
        )));
    }
    if description.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Description is required".to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_round_trips_through_serde() {
        assert_eq!(
            serde_json::to_string(&HealthRecordType::VetVisit).unwrap(),
            "\"vet-visit\""
        );
        assert_eq!(
            serde_json::from_str::<HealthRecordType>("\"needs-work\"").is_err(),
            true
        );
        assert_eq!(
            serde_json::from_str::<HealthRecordType>("\"illness\"").unwrap(),
            HealthRecordType::Illness
        );
    }

    #[test]
    fn unknown_stored_value_falls_back_to_other() {
        assert_eq!(
            HealthRecordType::from_str_lossy("acupuncture"),
            HealthRecordType::Other
        );
    }

    #[test]
    fn illness_and_injury_are_illness_signals() {
        assert!(HealthRecordType::Illness.is_illness());
        assert!(HealthRecordType::Injury.is_illness());
        assert!(!HealthRecordType::VetVisit.is_illness());
        assert!(!HealthRecordType::Medication.is_illness());
        assert!(!HealthRecordType::Other.is_illness());
    }
}
