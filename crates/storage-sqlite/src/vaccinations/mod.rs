//! SQLite storage implementation for vaccinations.

mod model;
mod repository;

pub use model::{NewVaccinationDB, VaccinationDB, VaccinationUpdateDB};
pub use repository::VaccinationRepository;
