//! SQLite storage implementation for dogs.

mod model;
mod repository;

pub use model::{DogDB, DogUpdateDB, NewDogDB};
pub use repository::DogRepository;
