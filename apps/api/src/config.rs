use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::content::http::DEFAULT_CONTENT_URL;
use crate::enrichment::http::{DEFAULT_QUOTES_URL, DEFAULT_WORDS_URL};
use crate::templates::composer::DEFAULT_MAX_BATCH_SIZE;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub words_api_url: String,
    pub quotes_api_url: String,
    pub enrichment_timeout: Duration,
    pub enrichment_enabled: bool,
    pub content_api_url: String,
    pub content_api_token: Option<String>,
    pub content_timeout: Duration,
    pub max_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            words_api_url: DEFAULT_WORDS_URL.to_string(),
            quotes_api_url: DEFAULT_QUOTES_URL.to_string(),
            enrichment_timeout: Duration::from_millis(3000),
            enrichment_enabled: true,
            content_api_url: DEFAULT_CONTENT_URL.to_string(),
            content_api_token: None,
            content_timeout: Duration::from_millis(10_000),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let max_batch_size = match lookup("MAX_BATCH_SIZE") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_BATCH_SIZE must be a positive integer")?,
            None => defaults.max_batch_size,
        };
        if max_batch_size == 0 {
            bail!("MAX_BATCH_SIZE must be at least 1");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            words_api_url: lookup("WORDS_API_URL").unwrap_or(defaults.words_api_url),
            quotes_api_url: lookup("QUOTES_API_URL").unwrap_or(defaults.quotes_api_url),
            enrichment_timeout: match lookup("ENRICHMENT_TIMEOUT_MS") {
                Some(v) => Duration::from_millis(
                    v.parse::<u64>()
                        .context("ENRICHMENT_TIMEOUT_MS must be a number of milliseconds")?,
                ),
                None => defaults.enrichment_timeout,
            },
            enrichment_enabled: match lookup("ENRICHMENT_ENABLED") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("ENRICHMENT_ENABLED must be true or false, got '{v}'"))?,
                None => defaults.enrichment_enabled,
            },
            content_api_url: lookup("CONTENT_API_URL").unwrap_or(defaults.content_api_url),
            content_api_token: lookup("CONTENT_API_TOKEN").filter(|t| !t.trim().is_empty()),
            content_timeout: match lookup("CONTENT_TIMEOUT_MS") {
                Some(v) => Duration::from_millis(
                    v.parse::<u64>()
                        .context("CONTENT_TIMEOUT_MS must be a number of milliseconds")?,
                ),
                None => defaults.content_timeout,
            },
            max_batch_size,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
