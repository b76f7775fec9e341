//! Library configuration.
//!
//! Loaded from the JSON file named by `LIBRARY_CONFIG` (if set), then
//! overridden by individual environment variables:
//!
//! - `LIBRARY_DAILY_FINE_RATE` - fine per whole overdue day
//! - `LIBRARY_LOAN_DAYS` - default loan period in days
//! - `LIBRARY_NOTIFIERS` - comma-separated channels (`email`, `sms`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::fine::DEFAULT_DAILY_RATE;

pub const CONFIG_PATH_VAR: &str = "LIBRARY_CONFIG";
pub const DAILY_FINE_RATE_VAR: &str = "LIBRARY_DAILY_FINE_RATE";
pub const LOAN_DAYS_VAR: &str = "LIBRARY_LOAN_DAYS";
pub const NOTIFIERS_VAR: &str = "LIBRARY_NOTIFIERS";

/// デフォルトの貸出日数
pub const DEFAULT_LOAN_DAYS: u32 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// 通知チャネル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
}

impl FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            other => Err(format!("Unknown notification channel: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub daily_fine_rate: f64,
    pub default_loan_days: u32,
    pub channels: Vec<NotificationChannel>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            daily_fine_rate: DEFAULT_DAILY_RATE,
            default_loan_days: DEFAULT_LOAN_DAYS,
            channels: vec![NotificationChannel::Email, NotificationChannel::Sms],
        }
    }
}

impl LibraryConfig {
    /// Parse a JSON document. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                let json = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path, source })?;
                serde_json::from_str(&json)?
            }
            None => Self::default(),
        };

        if let Some(value) = lookup(DAILY_FINE_RATE_VAR) {
            config.daily_fine_rate = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: DAILY_FINE_RATE_VAR,
                    value,
                })?;
        }

        if let Some(value) = lookup(LOAN_DAYS_VAR) {
            config.default_loan_days =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: LOAN_DAYS_VAR,
                        value,
                    })?;
        }

        if let Some(value) = lookup(NOTIFIERS_VAR) {
            config.channels = value
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(NotificationChannel::from_str)
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: NOTIFIERS_VAR,
                    value: value.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.daily_fine_rate.is_finite() || self.daily_fine_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "daily_fine_rate must be a non-negative number, got {}",
                self.daily_fine_rate
            )));
        }
        if self.channels.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one notification channel is required".to_string(),
            ));
        }
        Ok(())
    }
}
