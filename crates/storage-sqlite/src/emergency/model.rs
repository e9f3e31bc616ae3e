//! Database models for emergency contacts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::emergency::{
    ContactType, EmergencyContact, EmergencyContactUpdate, NewEmergencyContact,
};

use crate::users::UserDB;

/// Database model for emergency contacts
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
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::emergency_contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub contact_type: String,
    pub phone: String,
    pub address: Option<String>,
    pub available_24h: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for adding a new emergency contact
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::emergency_contacts)]
pub struct NewEmergencyContactDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub contact_type: String,
    pub phone: String,
    pub address: Option<String>,
    pub available_24h: bool,
}

/// Changeset for emergency contact updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::emergency_contacts)]
pub struct EmergencyContactUpdateDB {
    pub name: String,
    pub contact_type: String,
    pub phone: String,
    pub address: Option<String>,
    pub available_24h: bool,
}

// Conversion to domain models
impl From<EmergencyContactDB> for EmergencyContact {
    fn from(db: EmergencyContactDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            contact_type: ContactType::from_str_lossy(&db.contact_type),
            phone: db.phone,
            address: db.address,
            available_24h: db.available_24h,
            created_at: db.created_at,
        }
    }
}

impl NewEmergencyContactDB {
    pub fn from_domain(id: String, user_id: String, domain: NewEmergencyContact) -> Self {
        Self {
            id,
            user_id,
            name: domain.name,
            contact_type: domain.contact_type.as_str().to_string(),
            phone: domain.phone,
            address: domain.address,
            available_24h: domain.available_24h,
        }
    }
}

impl From<EmergencyContactUpdate> for EmergencyContactUpdateDB {
    fn from(domain: EmergencyContactUpdate) -> Self {
        Self {
            name: domain.name,
            contact_type: domain.contact_type.as_str().to_string(),
            phone: domain.phone,
            address: domain.address,
            available_24h: domain.available_24h,
        }
    }
}
