//! Nutrition module - domain models, services, and traits.

mod nutrition_model;
mod nutrition_service;
mod nutrition_traits;

pub use nutrition_model::{NewNutritionRecord, NutritionRecord, NutritionRecordUpdate};
pub use nutrition_service::NutritionService;
pub use nutrition_traits::{NutritionRepositoryTrait, NutritionServiceTrait};
