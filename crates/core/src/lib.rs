//! Pawkeeper Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Pawkeeper.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod appointments;
pub mod constants;
pub mod dogs;
pub mod emergency;
pub mod errors;
pub mod health_records;
pub mod nutrition;
pub mod training;
pub mod users;
pub mod vaccinations;
pub mod wellness;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
