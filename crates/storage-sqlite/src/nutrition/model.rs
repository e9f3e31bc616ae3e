//! Database models for nutrition records.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::nutrition::{NewNutritionRecord, NutritionRecord, NutritionRecordUpdate};

use crate::dogs::DogDB;

/// Database model for nutrition records
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
#[diesel(table_name = crate::schema::nutrition_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecordDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub food_brand: String,
    pub food_type: String,
    pub daily_amount: f64,
    pub calories_per_day: i32,
    pub protein_percentage: f64,
    pub fat_percentage: f64,
    pub carb_percentage: f64,
    pub weight_at_time: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for adding a new nutrition record
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::nutrition_records)]
pub struct NewNutritionRecordDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub food_brand: String,
    pub food_type: String,
    pub daily_amount: f64,
    pub calories_per_day: i32,
    pub protein_percentage: f64,
    pub fat_percentage: f64,
    pub carb_percentage: f64,
    pub weight_at_time: f64,
    pub notes: Option<String>,
}

/// Changeset for nutrition record updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::nutrition_records)]
pub struct NutritionRecordUpdateDB {
    pub date: NaiveDate,
    pub food_brand: String,
    pub food_type: String,
    pub daily_amount: f64,
    pub calories_per_day: i32,
    pub protein_percentage: f64,
    pub fat_percentage: f64,
    pub carb_percentage: f64,
    pub weight_at_time: f64,
    pub notes: Option<String>,
}

// Conversion to domain models
impl From<NutritionRecordDB> for NutritionRecord {
    fn from(db: NutritionRecordDB) -> Self {
        Self {
            id: db.id,
            dog_id: db.dog_id,
            date: db.date,
            food_brand: db.food_brand,
            food_type: db.food_type,
            daily_amount: db.daily_amount,
            calories_per_day: db.calories_per_day,
            protein_percentage: db.protein_percentage,
            fat_percentage: db.fat_percentage,
            carb_percentage: db.carb_percentage,
            weight_at_time: db.weight_at_time,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl NewNutritionRecordDB {
    pub fn from_domain(id: String, dog_id: String, domain: NewNutritionRecord) -> Self {
        Self {
            id,
            dog_id,
            date: domain.date,
            food_brand: domain.food_brand,
            food_type: domain.food_type,
            daily_amount: domain.daily_amount,
            calories_per_day: domain.calories_per_day,
            protein_percentage: domain.protein_percentage,
            fat_percentage: domain.fat_percentage,
            carb_percentage: domain.carb_percentage,
            weight_at_time: domain.weight_at_time,
            notes: domain.notes,
        }
    }
}

impl From<NutritionRecordUpdate> for NutritionRecordUpdateDB {
    fn from(domain: NutritionRecordUpdate) -> Self {
        Self {
            date: domain.date,
            food_brand: domain.food_brand,
            food_type: domain.food_type,
            daily_amount: domain.daily_amount,
            calories_per_day: domain.calories_per_day,
            protein_percentage: domain.protein_percentage,
            fat_percentage: domain.fat_percentage,
            carb_percentage: domain.carb_percentage,
            weight_at_time: domain.weight_at_time,
            notes: domain.notes,
        }
    }
}
