//! SQLite storage implementation for emergency contacts.

mod model;
mod repository;

pub use model::{EmergencyContactDB, EmergencyContactUpdateDB, NewEmergencyContactDB};
pub use repository::EmergencyContactRepository;
