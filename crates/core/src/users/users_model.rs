//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a registered owner account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 password hash. Never serialized in API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Preferred language for reminder emails (e.g. "en")
    pub language: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new user.
///
/// The password is hashed by the caller before this struct is built;
/// the core crate never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub language: String,
}

impl NewUser {
    /// Validates the new user data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 2 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name must be at least 2 characters".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Valid email is required".to_string(),
            )));
        }
        if self.password_hash.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "passwordHash".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language: Option<String>,
}

impl UserProfileUpdate {
    /// Validates the profile update data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 2 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name must be at least 2 characters".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Valid email is required".to_string(),
            )));
        }
        Ok(())
    }
}
