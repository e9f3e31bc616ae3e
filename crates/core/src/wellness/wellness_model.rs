//! Wellness domain models.
//!
//! The classification table is modeled as a single enum carrying its color
//! and recommended action as associated data, so the three can never fall
//! out of sync.

use serde::{Deserialize, Serialize};

/// Categorical status band for a composite health score.
///
/// Bands are selected top-down by [`StatusBand::classify`]; each band owns
/// its display color and recommended next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBand {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    Poor,
    Unknown,
}

impl StatusBand {
    /// Classifies a total score into a band. First matching range wins,
    /// evaluated top-down.
    ///
    /// The `Unknown` band (score 0) is unreachable through the scoring
    /// arithmetic because the health-event signal always contributes at
    /// least 10 points; it is kept to mirror the classification table.
    pub fn classify(score: u32) -> Self {
        match score {
            s if s >= 85 => StatusBand::Excellent,
            s if s >= 70 => StatusBand::Good,
            s if s >= 50 => StatusBand::Fair,
            s if s >= 30 => StatusBand::NeedsAttention,
            s if s > 0 => StatusBand::Poor,
            _ => StatusBand::Unknown,
        }
    }

    /// Human-readable label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Excellent => "Excellent",
            StatusBand::Good => "Good",
            StatusBand::Fair => "Fair",
            StatusBand::NeedsAttention => "Needs Attention",
            StatusBand::Poor => "Poor",
            StatusBand::Unknown => "Unknown",
        }
    }

    /// Display color associated with this band.
    pub fn color(&self) -> &'static str {
        match self {
            StatusBand::Excellent => "green",
            StatusBand::Good => "blue",
            StatusBand::Fair => "yellow",
            StatusBand::NeedsAttention => "orange",
            StatusBand::Poor => "red",
            StatusBand::Unknown => "gray",
        }
    }

    /// Recommended next action for this band.
    pub fn next_action(&self) -> &'static str {
        match self {
            StatusBand::Excellent => "Keep up the great work!",
            StatusBand::Good => "Consider scheduling a checkup",
            StatusBand::Fair => "Schedule a vet visit soon",
            StatusBand::NeedsAttention => "Update vaccinations and schedule checkup",
            StatusBand::Poor => "Immediate vet attention recommended",
            StatusBand::Unknown => "Add more health data",
        }
    }
}

impl std::fmt::Display for StatusBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Record counts backing a health-status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub total_vaccinations: usize,
    pub recent_vaccinations: usize,
    pub total_health_records: usize,
    pub recent_health_records: usize,
    pub upcoming_appointments: usize,
}

/// The derived health-status report for one dog.
///
/// Built fresh on every evaluation; never persisted. `status_color` and
/// `next_action` are always derived from `status`, the single construction
/// point being the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatusReport {
    /// Whether any of the three input collections was non-empty. Computed
    /// independently of the score: an empty history still scores 20 and
    /// reports `Poor`, so this flag can be `false` alongside a red status.
    pub has_enough_data: bool,
    pub score: u32,
    pub status: StatusBand,
    pub status_color: String,
    pub next_action: String,
    /// Labels of the scoring tiers that actually triggered, in signal order.
    pub factors: Vec<String>,
    pub summary: HealthSummary,
}
