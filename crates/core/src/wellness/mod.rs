//! Wellness module - the dog health-status scoring engine.
//!
//! This module turns a dog's vaccination history, health-event log, and
//! appointment list into a composite score, a categorical status band, a
//! recommended next action, and the list of contributing factors.
//!
//! # Architecture
//!
//! ```text
//! WellnessService → evaluate() → [Scoring Tiers] → HealthStatusReport
//!      ↓                              ↓
//! repositories              StatusBand (label, color, action)
//! ```
//!
//! - **Models** (`wellness_model.rs`) - `HealthStatusReport`, `HealthSummary`,
//!   and the `StatusBand` classification enum.
//! - **Evaluator** (`wellness_evaluator.rs`) - the pure scoring function and
//!   its four ordered rule tables.
//! - **Service** (`wellness_service.rs`) - fetches the three record
//!   collections and runs the evaluator.
//!
//! # Scoring signals
//!
//! Four weighted sub-scores sum to the total (maximum 100):
//!
//! - **Vaccinations** (max 40) - doses given in the last year
//! - **Health events** (max 30) - illness vs. checkup balance over six months
//! - **Appointments** (max 20) - upcoming and recent bookings
//! - **Regular care** (max 10) - overall depth of the care history
//!
//! The evaluator is deterministic: it reads nothing but its three input
//! collections and a single injected reference date, so a report can be
//! replayed byte-for-byte in tests.

mod wellness_evaluator;
mod wellness_model;
mod wellness_service;
mod wellness_traits;

#[cfg(test)]
mod wellness_tests;

pub use wellness_evaluator::{
    appointment_subscore, evaluate, health_event_subscore, regular_care_subscore,
    vaccination_subscore, SubScore,
};
pub use wellness_model::{HealthStatusReport, HealthSummary, StatusBand};
pub use wellness_service::WellnessService;
pub use wellness_traits::WellnessServiceTrait;
