//! Database models for health records.
//!
//! The record type is stored as its kebab-case wire string; unknown values
//! read back as `Other` rather than failing the whole query.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::health_records::{
    HealthRecord, HealthRecordType, HealthRecordUpdate, NewHealthRecord,
};

use crate::dogs::DogDB;

/// Database model for health records
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(DogDB, foreign_key = dog_id))]
#[diesel(table_name = crate::schema::health_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub record_type: String,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for logging a new health record
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::health_records)]
pub struct NewHealthRecordDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub record_type: String,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
}

/// Changeset for health record updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::health_records)]
pub struct HealthRecordUpdateDB {
    pub date: NaiveDate,
    pub record_type: String,
    pub title: String,
    pub description: String,
    pub veterinarian: Option<String>,
    pub medication: Option<String>,
    pub dosage: Option<String>,
}

// Conversion to domain models
impl From<HealthRecordDB> for HealthRecord {
    fn from(db: HealthRecordDB) -> Self {
        Self {
            id: db.id,
            dog_id: db.dog_id,
            date: db.date,
            record_type: HealthRecordType::from_str_lossy(&db.record_type),
            title: db.title,
            description: db.description,
            veterinarian: db.veterinarian,
            medication: db.medication,
            dosage: db.dosage,
            created_at: db.created_at,
        }
    }
}

impl NewHealthRecordDB {
    pub fn from_domain(id: String, dog_id: String, domain: NewHealthRecord) -> Self {
        Self {
            id,
            dog_id,
            date: domain.date,
            record_type: domain.record_type.as_str().to_string(),
            title: domain.title,
            description: domain.description,
            veterinarian: domain.veterinarian,
            medication: domain.medication,
            dosage: domain.dosage,
        }
    }
}

impl From<HealthRecordUpdate> for HealthRecordUpdateDB {
    fn from(domain: HealthRecordUpdate) -> Self {
        Self {
            date: domain.date,
            record_type: domain.record_type.as_str().to_string(),
            title: domain.title,
            description: domain.description,
            veterinarian: domain.veterinarian,
            medication: domain.medication,
            dosage: domain.dosage,
        }
    }
}
