//! Nutrition record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a dog's diet snapshot on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub food_brand: String,
    pub food_type: String,
    /// Daily ration in grams
    pub daily_amount: f64,
    pub calories_per_day: i32,
    pub protein_percentage: f64,
    pub fat_percentage: f64,
    pub carb_percentage: f64,
    /// The dog's weight in kilograms when the record was taken
    pub weight_at_time: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for adding a nutrition record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionRecord {
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

impl NewNutritionRecord {
    /// Validates the nutrition record data.
    pub fn validate(&self) -> Result<()> {
        validate_nutrition_fields(
            &self.food_brand,
            &self.food_type,
            self.daily_amount,
            self.calories_per_day,
            &[
                self.protein_percentage,
                self.fat_percentage,
                self.carb_percentage,
            ],
            self.weight_at_time,
        )
    }
}

/// Input model for updating a nutrition record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecordUpdate {
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

impl NutritionRecordUpdate {
    /// Validates the nutrition record update data.
    pub fn validate(&self) -> Result<()> {
        validate_nutrition_fields(
            &self.food_brand,
            &self.food_type,
            self.daily_amount,
            self.calories_per_day,
            &[
                self.protein_percentage,
                self.fat_percentage,
                self.carb_percentage,
            ],
            self.weight_at_time,
        )
    }
}

fn validate_nutrition_fields(
    food_brand: &str,
    food_type: &str,
    daily_amount: f64,
    calories_per_day: i32,
    percentages: &[f64],
    weight_at_time: f64,
) -> Result<()> {
    if food_brand.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Food brand is required".to_string(),
        )));
    }
    if food_type.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Food type is required".to_string(),
        )));
    }
    if daily_amount <= 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Daily amount must be greater than 0".to_string(),
        )));
    }
    if calories_per_day < 1 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Calories per day must be greater than 0".to_string(),
        )));
    }
    for pct in percentages {
        if !(0.0..=100.0).contains(pct) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Macro percentages must be between 0 and 100".to_string(),
            )));
        }
    }
    if weight_at_time <= 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Weight must be greater than 0".to_string(),
        )));
    }
    Ok(())
}
