//! The health-status evaluator.
//!
//! A pure function over three record collections and one injected reference
//! date. Each scoring signal is an explicit ordered tier table (condition →
//! points → factor label) evaluated top-down, first match wins, so every
//! tier can be unit-tested on its own.

use chrono::{Months, NaiveDate};

use super::wellness_model::{HealthStatusReport, HealthSummary, StatusBand};
use crate::appointments::Appointment;
use crate::health_records::{HealthRecord, HealthRecordType};
use crate::vaccinations::Vaccination;

/// Look-back window for vaccinations to count as recent.
const VACCINATION_WINDOW_MONTHS: u32 = 12;

/// Look-back window for health records to count as recent.
const HEALTH_RECORD_WINDOW_MONTHS: u32 = 6;

/// One tier of a scoring table: a guard over two counts, the points awarded,
/// and the factor label pushed into the report when the tier fires.
struct Tier {
    applies: fn(usize, usize) -> bool,
    points: u32,
    label: &'static str,
}

/// Outcome of one scoring signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScore {
    pub points: u32,
    pub factor: Option<&'static str>,
}

impl SubScore {
    const NONE: SubScore = SubScore {
        points: 0,
        factor: None,
    };
}

/// Vaccination signal, max 40 points. Guard input: (recent count, unused).
const VACCINATION_TIERS: &[Tier] = &[
    Tier {
        applies: |recent, _| recent >= 3,
        points: 40,
        label: "Up-to-date vaccinations",
    },
    Tier {
        applies: |recent, _| recent >= 1,
        points: 25,
        label: "Some recent vaccinations",
    },
];

/// Health-event signal, max 30 points. Guard input: (illness count, vet-visit
/// count) over the six-month window.
///
/// The final tier is a catch-all, so this signal always contributes at least
/// 10 points. A dog with no health records at all lands in the 20-point tier
/// (`0 <= 1`), which is why an empty history still scores 20 overall.
const HEALTH_EVENT_TIERS: &[Tier] = &[
    Tier {
        applies: |illness, vet_visits| illness == 0 && vet_visits >= 1,
        points: 30,
        label: "Regular vet checkups",
    },
    Tier {
        applies: |illness, _| illness <= 1,
        points: 20,
        label: "Good health maintenance",
    },
    Tier {
        applies: |_, _| true,
        points: 10,
        label: "Some health concerns",
    },
];

/// Appointment signal, max 20 points. Guard input: (upcoming count, total
/// count of the handed-in collection).
const APPOINTMENT_TIERS: &[Tier] = &[
    Tier {
        applies: |upcoming, _| upcoming > 0,
        points: 20,
        label: "Scheduled appointments",
    },
    Tier {
        applies: |_, total| total > 0,
        points: 15,
        label: "Recent appointments",
    },
];

/// Regular-care bonus, max 10 points. Guard input: (total health records,
/// total vaccinations) - totals, not the recency-filtered subsets.
const REGULAR_CARE_TIERS: &[Tier] = &[Tier {
    applies: |records, vaccinations| records >= 5 || vaccinations >= 3,
    points: 10,
    label: "Comprehensive care history",
}];

fn resolve(tiers: &[Tier], a: usize, b: usize) -> SubScore {
    tiers
        .iter()
        .find(|tier| (tier.applies)(a, b))
        .map(|tier| SubScore {
            points: tier.points,
            factor: Some(tier.label),
        })
        .unwrap_or(SubScore::NONE)
}

/// Vaccination sub-score from the count of recent (last 12 months) doses.
pub fn vaccination_subscore(recent_count: usize) -> SubScore {
    resolve(VACCINATION_TIERS, recent_count, 0)
}

/// Health-event sub-score from recent illness/injury and vet-visit counts.
pub fn health_event_subscore(illness_count: usize, vet_visit_count: usize) -> SubScore {
    resolve(HEALTH_EVENT_TIERS, illness_count, vet_visit_count)
}

/// Appointment sub-score from upcoming and total appointment counts.
pub fn appointment_subscore(upcoming_count: usize, total_count: usize) -> SubScore {
    resolve(APPOINTMENT_TIERS, upcoming_count, total_count)
}

/// Regular-care bonus from overall history depth.
pub fn regular_care_subscore(total_health_records: usize, total_vaccinations: usize) -> SubScore {
    resolve(REGULAR_CARE_TIERS, total_health_records, total_vaccinations)
}

fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Derives a [`HealthStatusReport`] from a dog's record collections.
///
/// Total and synchronous; every input permutation (including three empty
/// collections) yields a valid report. All date comparisons are date-only
/// against the single injected `today`.
pub fn evaluate(
    vaccinations: &[Vaccination],
    health_records: &[HealthRecord],
    appointments: &[Appointment],
    today: NaiveDate,
) -> HealthStatusReport {
    let vaccination_cutoff = months_back(today, VACCINATION_WINDOW_MONTHS);
    let health_record_cutoff = months_back(today, HEALTH_RECORD_WINDOW_MONTHS);

    let recent_vaccinations = vaccinations
        .iter()
        .filter(|v| v.date_given >= vaccination_cutoff)
        .count();

    let recent_health_records: Vec<&HealthRecord> = health_records
        .iter()
        .filter(|r| r.date >= health_record_cutoff)
        .collect();
    let illness_records = recent_health_records
        .iter()
        .filter(|r| r.record_type.is_illness())
        .count();
    let vet_visit_records = recent_health_records
        .iter()
        .filter(|r| r.record_type == HealthRecordType::VetVisit)
        .count();

    let upcoming_appointments = appointments.iter().filter(|a| a.date >= today).count();

    let sub_scores = [
        vaccination_subscore(recent_vaccinations),
        health_event_subscore(illness_records, vet_visit_records),
        appointment_subscore(upcoming_appointments, appointments.len()),
        regular_care_subscore(health_records.len(), vaccinations.len()),
    ];

    let score: u32 = sub_scores.iter().map(|s| s.points).sum();
    let factors: Vec<String> = sub_scores
        .iter()
        .filter_map(|s| s.factor.map(str::to_string))
        .collect();

    let status = StatusBand::classify(score);
    let has_enough_data =
        !vaccinations.is_empty() || !health_records.is_empty() || !appointments.is_empty();

    HealthStatusReport {
        has_enough_data,
        score,
        status,
        status_color: status.color().to_string(),
        next_action: status.next_action().to_string(),
        factors,
        summary: HealthSummary {
            total_vaccinations: vaccinations.len(),
            recent_vaccinations,
            total_health_records: health_records.len(),
            recent_health_records: recent_health_records.len(),
            upcoming_appointments,
        },
    }
}
