//! Dogs module - domain models, services, and traits.

mod dogs_model;
mod dogs_service;
mod dogs_traits;

pub use dogs_model::{Dog, DogUpdate, NewDog};
pub use dogs_service::DogService;
pub use dogs_traits::{DogRepositoryTrait, DogServiceTrait};
