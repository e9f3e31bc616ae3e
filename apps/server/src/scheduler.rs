//! Background schedulers for reminder emails.
//!
//! Two independent loops: appointment reminders every 15 minutes and
//! vaccination due-date reminders once a day. Both are no-ops when no email
//! endpoint is configured.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Days, Duration as ChronoDuration, Local};
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};

use pawkeeper_core::constants::VACCINATION_REMINDER_DAYS;

use crate::main_lib::AppState;

const APPOINTMENT_CHECK_SECS: u64 = 15 * 60;
const VACCINATION_CHECK_SECS: u64 = 24 * 60 * 60;

/// Initial delay before the first pass, to let the server fully start.
const INITIAL_DELAY_SECS: u64 = 30;

pub fn start_reminder_schedulers(state: Arc<AppState>) {
    if state.email.is_none() {
        info!("Email endpoint not configured; reminder schedulers disabled");
        return;
    }

    tokio::spawn(run_appointment_loop(state.clone()));
    tokio::spawn(run_vaccination_loop(state));
}

async fn run_appointment_loop(state: Arc<AppState>) {
    info!("Appointment reminder scheduler started (15-minute interval)");
    tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

    let mut tick = interval(Duration::from_secs(APPOINTMENT_CHECK_SECS));
    // Ids already sent this process lifetime; reminders fire at most once.
    let mut sent: HashSet<String> = HashSet::new();

    loop {
        tick.tick().await;
        if let Err(e) = send_due_appointment_reminders(&state, &mut sent).await {
            warn!("Appointment reminder pass failed: {}", e);
        }
    }
}

async fn send_due_appointment_reminders(
    state: &Arc<AppState>,
    sent: &mut HashSet<String>,
) -> anyhow::Result<()> {
    let email = match &state.email {
        Some(email) => email,
        None => return Ok(()),
    };

    let now = Local::now().naive_local();
    let reminders = state.appointment_service.reminders_for_date(now.date())?;

    for reminder in reminders {
        if sent.contains(&reminder.appointment_id) {
            continue;
        }

        let starts_at = reminder.date.and_time(reminder.time);
        let window_open = starts_at - ChronoDuration::minutes(reminder.reminder_time as i64);
        if now < window_open || now >= starts_at {
            continue;
        }

        match email.send_appointment_reminder(&reminder).await {
            Ok(()) => {
                debug!(
                    "Sent appointment reminder {} to {}",
                    reminder.appointment_id, reminder.owner_email
                );
                sent.insert(reminder.appointment_id);
            }
            Err(e) => warn!(
                "Failed to send appointment reminder {}: {}",
                reminder.appointment_id, e
            ),
        }
    }

    Ok(())
}

async fn run_vaccination_loop(state: Arc<AppState>) {
    info!("Vaccination reminder scheduler started (daily)");
    tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

    let mut tick = interval(Duration::from_secs(VACCINATION_CHECK_SECS));

    loop {
        tick.tick().await;
        if let Err(e) = send_vaccination_reminders(&state).await {
            warn!("Vaccination reminder pass failed: {}", e);
        }
    }
}

async fn send_vaccination_reminders(state: &Arc<AppState>) -> anyhow::Result<()> {
    let email = match &state.email {
        Some(email) => email,
        None => return Ok(()),
    };

    let today = Local::now().date_naive();
    let horizon = today
        .checked_add_days(Days::new(VACCINATION_REMINDER_DAYS as u64))
        .unwrap_or(today);
    let due = state.vaccination_service.due_between(today, horizon)?;

    for entry in due {
        match email.send_vaccination_reminder(&entry).await {
            Ok(()) => debug!(
                "Sent vaccination reminder {} to {}",
                entry.vaccination_id, entry.owner_email
            ),
            Err(e) => warn!(
                "Failed to send vaccination reminder {}: {}",
                entry.vaccination_id, e
            ),
        }
    }

    Ok(())
}
