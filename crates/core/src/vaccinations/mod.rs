//! Vaccinations module - domain models, services, and traits.

mod vaccinations_model;
mod vaccinations_service;
mod vaccinations_traits;

pub use vaccinations_model::{NewVaccination, Vaccination, VaccinationDue, VaccinationUpdate};
pub use vaccinations_service::VaccinationService;
pub use vaccinations_traits::{VaccinationRepositoryTrait, VaccinationServiceTrait};
