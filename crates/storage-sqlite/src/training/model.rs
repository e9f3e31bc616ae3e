//! Database models for training sessions.
//!
//! The practiced commands are stored as a JSON array in a text column.
//! A malformed value reads back as an empty list.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawkeeper_core::training::{
    NewTrainingSession, TrainingProgress, TrainingSession, TrainingSessionUpdate,
};

use crate::dogs::DogDB;

/// Database model for training sessions
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
#[diesel(table_name = crate::schema::training_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub commands: String,
    pub progress: String,
    pub notes: String,
    pub behavior_notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for logging a new training session
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::training_sessions)]
pub struct NewTrainingSessionDB {
    pub id: String,
    pub dog_id: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub commands: String,
    pub progress: String,
    pub notes: String,
    pub behavior_notes: Option<String>,
}

/// Changeset for training session updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::training_sessions)]
pub struct TrainingSessionUpdateDB {
    pub date: NaiveDate,
    pub duration: i32,
    pub commands: String,
    pub progress: String,
    pub notes: String,
    pub behavior_notes: Option<String>,
}

fn encode_commands(commands: &[String]) -> String {
    serde_json::to_string(commands).unwrap_or_else(|_| "[]".to_string())
}

// Conversion to domain models
impl From<TrainingSessionDB> for TrainingSession {
    fn from(db: TrainingSessionDB) -> Self {
        Self {
            id: db.id,
            dog_id: db.dog_id,
            date: db.date,
            duration: db.duration,
            commands: serde_json::from_str(&db.commands).unwrap_or_default(),
            progress: TrainingProgress::from_str_lossy(&db.progress),
            notes: db.notes,
            behavior_notes: db.behavior_notes,
            created_at: db.created_at,
        }
    }
}

impl NewTrainingSessionDB {
    pub fn from_domain(id: String, dog_id: String, domain: NewTrainingSession) -> Self {
        Self {
            id,
            dog_id,
            date: domain.date,
            duration: domain.duration,
            commands: encode_commands(&domain.commands),
            progress: domain.progress.as_str().to_string(),
            notes: domain.notes,
            behavior_notes: domain.behavior_notes,
        }
    }
}

impl From<TrainingSessionUpdate> for TrainingSessionUpdateDB {
    fn from(domain: TrainingSessionUpdate) -> Self {
        Self {
            date: domain.date,
            duration: domain.duration,
            commands: encode_commands(&domain.commands),
            progress: domain.progress.as_str().to_string(),
            notes: domain.notes,
            behavior_notes: domain.behavior_notes,
        }
    }
}
