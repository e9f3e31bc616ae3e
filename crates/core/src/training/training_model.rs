//! Training session domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Owner-reported progress rating for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingProgress {
    Excellent,
    #[default]
    Good,
    Fair,
    NeedsWork,
}

impl TrainingProgress {
    /// Returns the wire/storage representation of this rating.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingProgress::Excellent => "excellent",
            TrainingProgress::Good => "good",
            TrainingProgress::Fair => "fair",
            TrainingProgress::NeedsWork => "needs-work",
        }
    }

    /// Parses a stored string; unknown values map to `Good`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "excellent" => TrainingProgress::Excellent,
            "good" => TrainingProgress::Good,
            "fair" => TrainingProgress::Fair,
            "needs-work" => TrainingProgress::NeedsWork,
            _ => TrainingProgress::Good,
        }
    }
}

/// Domain model representing one training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    /// Session length in minutes
    pub duration: i32,
    /// Commands practiced during the session
    pub commands: Vec<String>,
    pub progress: TrainingProgress,
    pub notes: String,
    pub behavior_notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for logging a training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainingSession {
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub commands: Vec<String>,
    pub progress: TrainingProgress,
    pub notes: String,
    pub behavior_notes: Option<String>,
}

impl NewTrainingSession {
    /// Validates the training session data.
    pub fn validate(&self) -> Result<()> {
        validate_training_fields(self.duration, &self.notes)
    }
}

/// Input model for updating a training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionUpdate {
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub commands: Vec<String>,
    pub progress: TrainingProgress,
    pub notes: String,
    pub behavior_notes: Option<String>,
}

impl TrainingSessionUpdate {
    /// Validates the training session update data.
    pub fn validate(&self) -> Result<()> {
        validate_training_fields(self.duration, &self.notes)
    }
}

fn validate_training_fields(duration: i32, notes: &str) -> Result<()> {
    if duration < 1 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Duration must be at least 1 minute".to_string(),
        )));
    }
    if notes.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Notes are required".to_string(),
        )));
    }
    Ok(())
}
