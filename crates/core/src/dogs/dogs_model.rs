//! Dog domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DOG_AGE_YEARS;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a dog owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub breed: String,
    /// Age in whole years, 0..=30
    pub age: i32,
    /// Weight in kilograms
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new dog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
}

impl NewDog {
    /// Validates the new dog data.
    pub fn validate(&self) -> Result<()> {
        validate_dog_fields(&self.name, &self.breed, self.age, self.weight)
    }
}

/// Input model for updating an existing dog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogUpdate {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
    pub profile_picture: Option<String>,
    pub microchip_id: Option<String>,
    pub license_number: Option<String>,
}

impl DogUpdate {
    /// Validates the dog update data.
    pub fn validate(&self) -> Result<()> {
        validate_dog_fields(&self.name, &self.breed, self.age, self.weight)
    }
}

fn validate_dog_fields(name: &str, breed: &str, age: i32, weight: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Dog name is required".to_string(),
        )));
    }
    if breed.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Breed is required".to_string(),
        )));
    }
    if !(0..=MAX_DOG_AGE_YEARS).contains(&age) {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Age must be between 0 and 30".to_string(),
        )));
    }
    if weight <= 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Weight must be greater than 0".to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dog() -> NewDog {
        NewDog {
            name: "Rex".to_string(),
            breed: "Border Collie".to_string(),
            age: 4,
            weight: 18.5,
            profile_picture: None,
            microchip_id: None,
            license_number: None,
        }
    }

    #[test]
    fn valid_dog_passes() {
        assert!(sample_dog().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut dog = sample_dog();
        dog.name = "  ".to_string();
        assert!(dog.validate().is_err());
    }

    #[test]
    fn age_out_of_range_rejected() {
        let mut dog = sample_dog();
        dog.age = 31;
        assert!(dog.validate().is_err());
        dog.age = -1;
        assert!(dog.validate().is_err());
    }

    #[test]
    fn non_positive_weight_rejected() {
        let mut dog = sample_dog();
        dog.weight = 0.0;
        assert!(dog.validate().is_err());
    }
}
