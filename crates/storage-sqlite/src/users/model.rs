//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::users::{NewUser, User};

/// Database model for users
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub language: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub language: String,
}

/// Changeset for profile updates; bumps `updated_at`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct UserProfileUpdateDB {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            password_hash: db.password_hash,
            language: db.language,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewUserDB {
    pub fn from_domain(id: String, domain: NewUser) -> Self {
        Self {
            id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            password_hash: domain.password_hash,
            language: domain.language,
        }
    }
}
