use anyhow::{Context, Result};
use std::time::Duration;

/// Where the complete-hsk-vocabulary word lists are published
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/drkameleon/complete-hsk-vocabulary/main/wordlists/exclusive/new/";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_PRELOAD_DELAY_MS: u64 = 1000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub bind_addr: String,
    pub preload_delay: Duration,
    pub fetch_timeout: Duration,
}

impl AppConfig {
    /// Reads settings from the environment (`.env` is loaded by `main`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let number = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a whole number, got {:?}", key, raw)),
                None => Ok(default),
            }
        };

        Ok(Self {
            base_url: lookup("HSK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            preload_delay: Duration::from_millis(number("PRELOAD_DELAY_MS", DEFAULT_PRELOAD_DELAY_MS)?),
            fetch_timeout: Duration::from_secs(number("FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?),
        })
    }
}
