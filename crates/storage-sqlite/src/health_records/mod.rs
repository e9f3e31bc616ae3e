//! SQLite storage implementation for health records.

mod model;
mod repository;

pub use model::{HealthRecordDB, HealthRecordUpdateDB, NewHealthRecordDB};
pub use repository::HealthRecordRepository;
