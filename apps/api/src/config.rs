use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Directory holding profile.json, careers.json and (optionally) mbti.json.
    pub data_dir: PathBuf,
    pub records_refresh_secs: u64,
    pub session_ttl_minutes: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            data_dir: PathBuf::from(optional_env("DATA_DIR", "data")),
            records_refresh_secs: parse_env("RECORDS_REFRESH_SECS", "300")?,
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", "120")?,
            port: parse_env("PORT", "8080")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key, default)
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number"))
}
