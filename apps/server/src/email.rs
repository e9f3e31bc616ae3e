//! Outbound reminder email delivery.
//!
//! Mail is handed off as JSON to an external delivery endpoint configured
//! via `PK_EMAIL_API_URL`. When no endpoint is configured the schedulers
//! skip sending entirely.

use pawkeeper_core::appointments::AppointmentReminder;
use pawkeeper_core::vaccinations::VaccinationDue;
use serde::Serialize;

use crate::config::EmailConfig;

#[derive(Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    body: String,
}

pub struct EmailClient {
    http: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
    from_address: String,
}

impl EmailClient {
    pub fn new(config: &EmailConfig) -> Self {
        EmailClient {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            from_address: config.from_address.clone(),
        }
    }

    async fn send(&self, to: &str, subject: String, body: String) -> anyhow::Result<()> {
        let email = OutboundEmail {
            from: &self.from_address,
            to,
            subject,
            body,
        };

        let mut request = self.http.post(&self.api_url).json(&email);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            anyhow::bail!("email endpoint returned {}", response.status());
        }
        Ok(())
    }

    pub async fn send_appointment_reminder(
        &self,
        reminder: &AppointmentReminder,
    ) -> anyhow::Result<()> {
        let subject = format!("Reminder: {} for {}", reminder.title, reminder.dog_name);
        let body = format!(
            "Hi {},\n\n{} has \"{}\" today at {}.\n\nPawKeeper",
            reminder.owner_name,
            reminder.dog_name,
            reminder.title,
            reminder.time.format("%H:%M"),
        );
        self.send(&reminder.owner_email, subject, body).await
    }

    pub async fn send_vaccination_reminder(&self, due: &VaccinationDue) -> anyhow::Result<()> {
        let subject = format!("Vaccination due soon for {}", due.dog_name);
        let body = format!(
            "Hi {},\n\n{}'s {} vaccination is due on {}.\n\nPawKeeper",
            due.owner_name,
            due.dog_name,
            due.vaccine_name,
            due.next_due_date.format("%Y-%m-%d"),
        );
        self.send(&due.owner_email, subject, body).await
    }
}
