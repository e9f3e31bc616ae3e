//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{NewUserDB, UserDB, UserProfileUpdateDB};
pub use repository::UserRepository;
