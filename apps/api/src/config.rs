use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::progression::learning_path::{
    PriorityThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD,
};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON override for the requirement table. `None` uses the builtin table.
    pub requirements_path: Option<PathBuf>,
    /// JSON override for the advice table. `None` uses the builtin table.
    pub advice_path: Option<PathBuf>,
    pub priority_thresholds: PriorityThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            requirements_path: None,
            advice_path: None,
            priority_thresholds: PriorityThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let priority_thresholds = PriorityThresholds {
            high: parse_or(&lookup, "PRIORITY_HIGH_THRESHOLD", DEFAULT_HIGH_THRESHOLD)?,
            medium: parse_or(&lookup, "PRIORITY_MEDIUM_THRESHOLD", DEFAULT_MEDIUM_THRESHOLD)?,
        };
        validate_thresholds(&priority_thresholds)?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            requirements_path: optional_path(&lookup, "REQUIREMENTS_PATH"),
            advice_path: optional_path(&lookup, "ADVICE_PATH"),
            priority_thresholds,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn optional_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}

fn validate_thresholds(t: &PriorityThresholds) -> Result<()> {
    if !(t.medium.is_finite() && t.high.is_finite()) || t.medium <= 0.0 || t.medium > t.high {
        bail!(
            "Priority thresholds must satisfy 0 < medium <= high (got medium={}, high={})",
            t.medium,
            t.high
        );
    }
    Ok(())
}
