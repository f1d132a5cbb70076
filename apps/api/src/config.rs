use anyhow::{Context, Result};
use tracing::warn;

/// Application configuration loaded from environment variables.
/// Supabase credentials are optional at startup: store calls fail at
/// request time when they are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub supabase_anon_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            supabase_url: optional_env("SUPABASE_URL"),
            supabase_service_key: optional_env("SUPABASE_SERVICE_KEY"),
            supabase_anon_key: optional_env("SUPABASE_ANON_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Called once logging is up; missing credentials warn but never abort.
    pub fn warn_if_missing_credentials(&self) {
        if self.supabase_url.is_empty() || self.supabase_service_key.is_empty() {
            warn!(
                "Supabase service credentials missing. Set SUPABASE_URL and SUPABASE_SERVICE_KEY in .env"
            );
        }
        if self.supabase_anon_key.is_empty() {
            warn!("SUPABASE_ANON_KEY is not set; interactive sign-in will fail");
        }
    }
}

fn optional_env(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}
