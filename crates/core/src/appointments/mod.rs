//! Appointments module - domain models, services, and traits.

mod appointments_model;
mod appointments_service;
mod appointments_traits;

pub use appointments_model::{
    Appointment, AppointmentReminder, AppointmentType, AppointmentUpdate, NewAppointment,
};
pub use appointments_service::AppointmentService;
pub use appointments_traits::{AppointmentRepositoryTrait, AppointmentServiceTrait};
