//! SQLite storage implementation for nutrition records.

mod model;
mod repository;

pub use model::{NewNutritionRecordDB, NutritionRecordDB, NutritionRecordUpdateDB};
pub use repository::NutritionRepository;
