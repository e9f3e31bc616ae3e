//! Database models for dogs.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::dogs::{Dog, NewDog};

use crate::users::UserDB;

/// Database model for dogs
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
#[diesel(table_name = crate::schema::dogs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DogDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new dog
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::dogs)]
pub struct NewDogDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
}

/// Changeset for dog updates; bumps `updated_at`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::dogs)]
pub struct DogUpdateDB {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<DogDB> for Dog {
    fn from(db: DogDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            breed: db.breed,
            age: db.age,
            weight: db.weight,
            profile_picture: db.profile_picture,
            microchip_id: db.microchip_id,
            license_number: db.license_number,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewDogDB {
    pub fn from_domain(id: String, user_id: String, domain: NewDog) -> Self {
        Self {
            id,
            user_id,
            name: domain.name,
            breed: domain.breed,
            age: domain.age,
            weight: domain.weight,
            profile_picture: domain.profile_picture,
            microchip_id: domain.microchip_id,
            license_number: domain.license_number,
        }
    }
}
