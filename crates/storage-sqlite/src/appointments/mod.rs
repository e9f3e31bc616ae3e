//! SQLite storage implementation for appointments.

mod model;
mod repository;

pub use model::{AppointmentDB, AppointmentUpdateDB, NewAppointmentDB};
pub use repository::AppointmentRepository;
