//! Database models for appointments.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::appointments::{
    Appointment, AppointmentType, AppointmentUpdate, NewAppointment,
};

use crate::dogs::DogDB;

/// Database model for appointments
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
#[diesel(table_name = crate::schema::appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDB {
    pub id: String,
    pub dog_id: String,
    pub title: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub reminder: bool,
    pub reminder_time: i32,
    pub created_at: NaiveDateTime,
}

/// Database model for scheduling a new appointment
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::appointments)]
pub struct NewAppointmentDB {
    pub id: String,
    pub dog_id: String,
    pub title: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub reminder: bool,
    pub reminder_time: i32,
}

/// Changeset for appointment updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::appointments)]
pub struct AppointmentUpdateDB {
    pub title: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub reminder: bool,
    pub reminder_time: i32,
}

// Conversion to domain models
impl From<AppointmentDB> for Appointment {
    fn from(db: AppointmentDB) -> Self {
        Self {
            id: db.id,
            dog_id: db.dog_id,
            title: db.title,
            appointment_type: AppointmentType::from_str_lossy(&db.appointment_type),
            date: db.date,
            time: db.time,
            location: db.location,
            notes: db.notes,
            reminder: db.reminder,
            reminder_time: db.reminder_time,
            created_at: db.created_at,
        }
    }
}

impl NewAppointmentDB {
    pub fn from_domain(id: String, dog_id: String, domain: NewAppointment) -> Self {
        Self {
            id,
            dog_id,
            title: domain.title,
            appointment_type: domain.appointment_type.as_str().to_string(),
            date: domain.date,
            time: domain.time,
            location: domain.location,
            notes: domain.notes,
            reminder: domain.reminder,
            reminder_time: domain.reminder_time,
        }
    }
}

impl From<AppointmentUpdate> for AppointmentUpdateDB {
    fn from(domain: AppointmentUpdate) -> Self {
        Self {
            title: domain.title,
            appointment_type: domain.appointment_type.as_str().to_string(),
            date: domain.date,
            time: domain.time,
            location: domain.location,
            notes: domain.notes,
            reminder: domain.reminder,
            reminder_time: domain.reminder_time,
        }
    }
}
