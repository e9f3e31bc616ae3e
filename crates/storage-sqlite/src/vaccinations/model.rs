//! Database models for vaccinations.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::vaccinations::{NewVaccination, Vaccination, VaccinationUpdate};

use crate::dogs::DogDB;

/// Database model for vaccinations
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
#[diesel(table_name = crate::schema::vaccinations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct VaccinationDB {
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

/// Database model for recording a new vaccination
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::vaccinations)]
pub struct NewVaccinationDB {
    pub id: String,
    pub dog_id: String,
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub date_given: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: String,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
}

/// Changeset for vaccination updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::vaccinations)]
pub struct VaccinationUpdateDB {
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub date_given: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: String,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
}

// Conversion to domain models
impl From<VaccinationDB> for Vaccination {
    fn from(db: VaccinationDB) -> Self {
        Self {
            id: db.id,
            dog_id: db.dog_id,
            vaccine_name: db.vaccine_name,
            vaccine_type: db.vaccine_type,
            date_given: db.date_given,
            next_due_date: db.next_due_date,
            veterinarian: db.veterinarian,
            batch_number: db.batch_number,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl NewVaccinationDB {
    pub fn from_domain(id: String, dog_id: String, domain: NewVaccination) -> Self {
        Self {
            id,
            dog_id,
            vaccine_name: domain.vaccine_name,
            vaccine_type: domain.vaccine_type,
            date_given: domain.date_given,
            next_due_date: domain.next_due_date,
            veterinarian: domain.veterinarian,
            batch_number: domain.batch_number,
            notes: domain.notes,
        }
    }
}

impl From<VaccinationUpdate> for VaccinationUpdateDB {
    fn from(domain: VaccinationUpdate) -> Self {
        Self {
            vaccine_name: domain.vaccine_name,
            vaccine_type: domain.vaccine_type,
            date_given: domain.date_given,
            next_due_date: domain.next_due_date,
            veterinarian: domain.veterinarian,
            batch_number: domain.batch_number,
            notes: domain.notes,
        }
    }
}
