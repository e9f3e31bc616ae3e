//! Server configuration, read once from the environment at startup.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;

pub struct Config {
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Secret used to sign access tokens.
    pub jwt_secret: String,
    /// Access token lifetime in hours.
    pub token_ttl_hours: i64,
    /// Email delivery endpoint; reminders are skipped when unset.
    pub email: Option<EmailConfig>,
}

pub struct EmailConfig {
    /// HTTP endpoint that accepts outbound mail as JSON.
    pub api_url: String,
    pub api_token: Option<String>,
    pub from_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = std::env::var("PK_DB_PATH").unwrap_or_else(|_| "pawkeeper.db".to_string());
        let listen_addr =
            std::env::var("PK_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // Without a configured secret, tokens do not survive a restart.
        let jwt_secret = std::env::var("PK_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("PK_JWT_SECRET not set; generating an ephemeral signing key");
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            BASE64.encode(bytes)
        });

        let token_ttl_hours = std::env::var("PK_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let email = std::env::var("PK_EMAIL_API_URL").ok().map(|api_url| EmailConfig {
            api_url,
            api_token: std::env::var("PK_EMAIL_API_TOKEN").ok(),
            from_address: std::env::var("PK_EMAIL_FROM")
                .unwrap_or_else(|_| "reminders@pawkeeper.app".to_string()),
        });

        Config {
            db_path,
            listen_addr,
            jwt_secret,
            token_ttl_hours,
            email,
        }
    }
}
