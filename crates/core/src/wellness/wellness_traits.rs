//! Wellness service trait.

use chrono::NaiveDate;

use super::wellness_model::HealthStatusReport;
use crate::errors::Result;

/// Trait defining the contract for the wellness service.
///
/// The reference date is injected by the caller so reports are deterministic
/// and replayable; the service itself never reads the wall clock.
pub trait WellnessServiceTrait: Send + Sync {
    /// Derives the health-status report for one dog as of `today`.
    ///
    /// Ownership of the dog must already have been verified by the caller;
    /// this service only reads record collections.
    fn health_status(&self, dog_id: &str, today: NaiveDate) -> Result<HealthStatusReport>;
}
