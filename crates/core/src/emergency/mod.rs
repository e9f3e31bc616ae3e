//! Emergency contacts module - domain models, services, and traits.

mod emergency_model;
mod emergency_service;
mod emergency_traits;

pub use emergency_model::{ContactType, EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
pub use emergency_service::EmergencyContactService;
pub use emergency_traits::{EmergencyContactRepositoryTrait, EmergencyContactServiceTrait};
