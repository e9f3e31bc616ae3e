//! Tests for the health-status evaluator and its scoring tiers.

use chrono::{Days, NaiveDate, NaiveDateTime};

use super::wellness_evaluator::{
    appointment_subscore, evaluate, health_event_subscore, regular_care_subscore,
    vaccination_subscore,
};
use super::wellness_model::StatusBand;
use crate::appointments::{Appointment, AppointmentType};
use crate::health_records::{HealthRecord, HealthRecordType};
use crate::vaccinations::Vaccination;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn stamp() -> NaiveDateTime {
    reference_date().and_hms_opt(12, 0, 0).unwrap()
}

fn vaccination(date_given: NaiveDate) -> Vaccination {
    Vaccination {
        id: "v1".to_string(),
        dog_id: "d1".to_string(),
        vaccine_name: "Rabies".to_string(),
        vaccine_type: "core".to_string(),
        date_given,
        next_due_date: None,
        veterinarian: "Dr. Alvarez".to_string(),
        batch_number: None,
        notes: None,
        created_at: stamp(),
    }
}

fn health_record(date: NaiveDate, record_type: HealthRecordType) -> HealthRecord {
    HealthRecord {
        id: "h1".to_string(),
        dog_id: "d1".to_string(),
        date,
        record_type,
        title: "entry".to_string(),
        description: "entry".to_string(),
        veterinarian: None,
        medication: None,
        dosage: None,
        created_at: stamp(),
    }
}

fn appointment(date: NaiveDate) -> Appointment {
    Appointment {
        id: "a1".to_string(),
        dog_id: "d1".to_string(),
        title: "Checkup".to_string(),
        appointment_type: AppointmentType::Vet,
        date,
        time: chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        location: None,
        notes: None,
        reminder: true,
        reminder_time: 60,
        created_at: stamp(),
    }
}

// ==================== Tier tables ====================

#[test]
fn vaccination_tiers() {
    assert_eq!(vaccination_subscore(0).points, 0);
    assert_eq!(vaccination_subscore(0).factor, None);
    assert_eq!(vaccination_subscore(1).points, 25);
    assert_eq!(vaccination_subscore(2).points, 25);
    assert_eq!(
        vaccination_subscore(2).factor,
        Some("Some recent vaccinations")
    );
    assert_eq!(vaccination_subscore(3).points, 40);
    assert_eq!(
        vaccination_subscore(3).factor,
        Some("Up-to-date vaccinations")
    );
    assert_eq!(vaccination_subscore(7).points, 40);
}

#[test]
fn health_event_tiers() {
    // No illness, at least one vet visit
    assert_eq!(health_event_subscore(0, 1).points, 30);
    assert_eq!(health_event_subscore(0, 1).factor, Some("Regular vet checkups"));
    // Zero records of any kind still lands in the 20-point tier
    assert_eq!(health_event_subscore(0, 0).points, 20);
    assert_eq!(
        health_event_subscore(0, 0).factor,
        Some("Good health maintenance")
    );
    assert_eq!(health_event_subscore(1, 0).points, 20);
    assert_eq!(health_event_subscore(1, 3).points, 20);
    // Two or more illness events
    assert_eq!(health_event_subscore(2, 0).points, 10);
    assert_eq!(health_event_subscore(2, 5).factor, Some("Some health concerns"));
}

#[test]
fn health_event_signal_is_never_zero() {
    for illness in 0..5 {
        for vet_visits in 0..5 {
            assert!(health_event_subscore(illness, vet_visits).points >= 10);
        }
    }
}

#[test]
fn appointment_tiers() {
    assert_eq!(appointment_subscore(1, 1).points, 20);
    assert_eq!(appointment_subscore(1, 1).factor, Some("Scheduled appointments"));
    assert_eq!(appointment_subscore(0, 2).points, 15);
    assert_eq!(appointment_subscore(0, 2).factor, Some("Recent appointments"));
    assert_eq!(appointment_subscore(0, 0).points, 0);
    assert_eq!(appointment_subscore(0, 0).factor, None);
}

#[test]
fn regular_care_tiers() {
    assert_eq!(regular_care_subscore(5, 0).points, 10);
    assert_eq!(regular_care_subscore(0, 3).points, 10);
    assert_eq!(regular_care_subscore(4, 2).points, 0);
    assert_eq!(regular_care_subscore(4, 2).factor, None);
}

// ==================== Classification ====================

#[test]
fn status_band_edges() {
    assert_eq!(StatusBand::classify(100), StatusBand::Excellent);
    assert_eq!(StatusBand::classify(85), StatusBand::Excellent);
    assert_eq!(StatusBand::classify(84), StatusBand::Good);
    assert_eq!(StatusBand::classify(70), StatusBand::Good);
    assert_eq!(StatusBand::classify(69), StatusBand::Fair);
    assert_eq!(StatusBand::classify(50), StatusBand::Fair);
    assert_eq!(StatusBand::classify(49), StatusBand::NeedsAttention);
    assert_eq!(StatusBand::classify(30), StatusBand::NeedsAttention);
    assert_eq!(StatusBand::classify(29), StatusBand::Poor);
    assert_eq!(StatusBand::classify(1), StatusBand::Poor);
    assert_eq!(StatusBand::classify(0), StatusBand::Unknown);
}

#[test]
fn status_band_carries_color_and_action() {
    assert_eq!(StatusBand::Excellent.color(), "green");
    assert_eq!(StatusBand::Good.color(), "blue");
    assert_eq!(StatusBand::Fair.color(), "yellow");
    assert_eq!(StatusBand::NeedsAttention.color(), "orange");
    assert_eq!(StatusBand::Poor.color(), "red");
    assert_eq!(StatusBand::Unknown.color(), "gray");
    assert_eq!(
        StatusBand::NeedsAttention.next_action(),
        "Update vaccinations and schedule checkup"
    );
    assert_eq!(StatusBand::NeedsAttention.label(), "Needs Attention");
}

#[test]
fn status_band_serializes_as_label() {
    assert_eq!(
        serde_json::to_string(&StatusBand::NeedsAttention).unwrap(),
        "\"Needs Attention\""
    );
    assert_eq!(
        serde_json::to_string(&StatusBand::Excellent).unwrap(),
        "\"Excellent\""
    );
}

// ==================== Evaluator ====================

#[test]
fn empty_inputs_yield_poor_with_floor_score() {
    let report = evaluate(&[], &[], &[], reference_date());

    assert!(!report.has_enough_data);
    assert_eq!(report.score, 20);
    assert_eq!(report.status, StatusBand::Poor);
    assert_eq!(report.status_color, "red");
    assert_eq!(report.next_action, "Immediate vet attention recommended");
    assert_eq!(report.factors, vec!["Good health maintenance"]);
    assert_eq!(report.summary.total_vaccinations, 0);
    assert_eq!(report.summary.upcoming_appointments, 0);
}

#[test]
fn score_never_drops_below_ten() {
    let today = reference_date();
    // Worst realistic case: two recent illness events, nothing else.
    let records = vec![
        health_record(today, HealthRecordType::Illness),
        health_record(today, HealthRecordType::Injury),
    ];
    let report = evaluate(&[], &records, &[], today);
    assert!(report.score >= 10);
    assert_eq!(report.factors, vec!["Some health concerns"]);
}

#[test]
fn evaluation_is_deterministic() {
    let today = reference_date();
    let vaccinations = vec![vaccination(today), vaccination(today - Days::new(30))];
    let records = vec![health_record(today, HealthRecordType::VetVisit)];
    let appointments = vec![appointment(today + Days::new(7))];

    let first = evaluate(&vaccinations, &records, &appointments, today);
    let second = evaluate(&vaccinations, &records, &appointments, today);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn two_recent_vaccinations_score_twenty_five() {
    let today = reference_date();
    let vaccinations = vec![vaccination(today), vaccination(today)];
    let report = evaluate(&vaccinations, &[], &[], today);
    // 25 (vaccinations) + 20 (health floor)
    assert_eq!(report.score, 45);
    assert!(report
        .factors
        .contains(&"Some recent vaccinations".to_string()));
}

#[test]
fn illness_count_tier_boundary() {
    let today = reference_date();

    let one = vec![health_record(today, HealthRecordType::Illness)];
    let report = evaluate(&[], &one, &[], today);
    assert!(report.factors.contains(&"Good health maintenance".to_string()));
    assert_eq!(report.score, 20);

    let two = vec![
        health_record(today, HealthRecordType::Illness),
        health_record(today, HealthRecordType::Illness),
    ];
    let report = evaluate(&[], &two, &[], today);
    assert!(report.factors.contains(&"Some health concerns".to_string()));
    assert_eq!(report.score, 10);
}

#[test]
fn past_appointment_scores_fifteen() {
    let today = reference_date();
    let yesterday = today - Days::new(1);
    let report = evaluate(&[], &[], &[appointment(yesterday)], today);
    // 20 (health floor) + 15 (recent appointment)
    assert_eq!(report.score, 35);
    assert!(report.factors.contains(&"Recent appointments".to_string()));
    assert_eq!(report.summary.upcoming_appointments, 0);
}

#[test]
fn appointment_today_counts_as_upcoming() {
    let today = reference_date();
    let report = evaluate(&[], &[], &[appointment(today)], today);
    assert!(report.factors.contains(&"Scheduled appointments".to_string()));
    assert_eq!(report.summary.upcoming_appointments, 1);
}

#[test]
fn full_care_history_scores_one_hundred() {
    let today = reference_date();
    let vaccinations = vec![
        vaccination(today - Days::new(10)),
        vaccination(today - Days::new(100)),
        vaccination(today - Days::new(200)),
    ];
    let health_records = vec![
        health_record(today - Days::new(5), HealthRecordType::VetVisit),
        health_record(today - Days::new(220), HealthRecordType::Medication),
        health_record(today - Days::new(250), HealthRecordType::Medication),
        health_record(today - Days::new(280), HealthRecordType::Other),
        health_record(today - Days::new(300), HealthRecordType::VetVisit),
        health_record(today - Days::new(330), HealthRecordType::Other),
    ];
    let appointments = vec![appointment(today + Days::new(14))];

    let report = evaluate(&vaccinations, &health_records, &appointments, today);

    assert_eq!(report.score, 100);
    assert_eq!(report.status, StatusBand::Excellent);
    assert_eq!(report.status_color, "green");
    assert_eq!(
        report.factors,
        vec![
            "Up-to-date vaccinations",
            "Regular vet checkups",
            "Scheduled appointments",
            "Comprehensive care history",
        ]
    );
    assert!(report.has_enough_data);
}

#[test]
fn score_of_exactly_eighty_five_is_excellent() {
    let today = reference_date();
    // 25 (two recent vaccinations) + 30 (vet visit, no illness)
    // + 20 (upcoming appointment) + 10 (three total vaccinations) = 85
    let vaccinations = vec![
        vaccination(today - Days::new(10)),
        vaccination(today - Days::new(20)),
        vaccination(today - Days::new(400)),
    ];
    let health_records = vec![health_record(today, HealthRecordType::VetVisit)];
    let appointments = vec![appointment(today + Days::new(3))];

    let report = evaluate(&vaccinations, &health_records, &appointments, today);
    assert_eq!(report.score, 85);
    assert_eq!(report.status, StatusBand::Excellent);
}

#[test]
fn old_vaccination_excluded_from_recent_but_counted_in_totals() {
    let today = reference_date();
    let vaccinations = vec![vaccination(today - Days::new(400))];
    let report = evaluate(&vaccinations, &[], &[], today);

    assert_eq!(report.summary.total_vaccinations, 1);
    assert_eq!(report.summary.recent_vaccinations, 0);
    // No vaccination factor: the dose is outside the 12-month window.
    assert!(!report
        .factors
        .iter()
        .any(|f| f.contains("vaccinations")));
    assert_eq!(report.score, 20);
}

#[test]
fn old_health_record_excluded_from_recent_window() {
    let today = reference_date();
    // An illness seven months ago is outside the six-month window, so the
    // health signal sees zero illness events.
    let records = vec![
        health_record(today - Days::new(215), HealthRecordType::Illness),
        health_record(today - Days::new(215), HealthRecordType::Illness),
        health_record(today, HealthRecordType::VetVisit),
    ];
    let report = evaluate(&[], &records, &[], today);
    assert!(report.factors.contains(&"Regular vet checkups".to_string()));
    assert_eq!(report.summary.total_health_records, 3);
    assert_eq!(report.summary.recent_health_records, 1);
}

#[test]
fn report_serializes_with_camel_case_wire_shape() {
    let report = evaluate(&[], &[], &[], reference_date());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hasEnoughData"], false);
    assert_eq!(json["score"], 20);
    assert_eq!(json["status"], "Poor");
    assert_eq!(json["statusColor"], "red");
    assert_eq!(json["nextAction"], "Immediate vet attention recommended");
    assert_eq!(json["summary"]["totalVaccinations"], 0);
    assert_eq!(json["summary"]["upcomingAppointments"], 0);
}
