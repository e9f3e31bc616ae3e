//! Health records module - domain models, services, and traits.

mod health_records_model;
mod health_records_service;
mod health_records_traits;

pub use health_records_model::{
    HealthRecord, HealthRecordType, HealthRecordUpdate, NewHealthRecord,
};
pub use health_records_service::HealthRecordService;
pub use health_records_traits::{HealthRecordRepositoryTrait, HealthRecordServiceTrait};
