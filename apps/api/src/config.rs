use anyhow::{anyhow, Context, Result};

use crate::matching::matcher::ScoreBasis;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub score_basis: ScoreBasis,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            score_basis: ScoreBasis::AllTokens,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => defaults.max_upload_bytes,
            },
            score_basis: match lookup("SCORE_BASIS") {
                Some(v) => v
                    .parse::<ScoreBasis>()
                    .map_err(|e| anyhow!(e))
                    .context("SCORE_BASIS is invalid")?,
                None => defaults.score_basis,
            },
        })
    }
}
