//! Dashboard configuration parsed from environment variables.

use std::time::Duration;

use crate::locale::Language;

pub const DEFAULT_STEP_DELAY_MS: u64 = 800;
pub const DEFAULT_MARKET_DELAY_MS: u64 = 1500;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_PLAYBACK_MS: u64 = 2000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Simulated latencies and session defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Suspension before each diagnosis progress step.
    pub step_delay: Duration,
    /// Suspension before a market table regeneration lands.
    pub market_delay: Duration,
    /// Suspension before an assistant reply is appended.
    pub reply_delay: Duration,
    /// Length of one simulated audio playback.
    pub playback_delay: Duration,
    /// Seed for diagnosis selection. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub language: Language,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            market_delay: Duration::from_millis(DEFAULT_MARKET_DELAY_MS),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            playback_delay: Duration::from_millis(DEFAULT_PLAYBACK_MS),
            seed: None,
            language: Language::En,
        }
    }
}

impl DashboardConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `KISAN_STEP_DELAY_MS`: default 800
    /// - `KISAN_MARKET_DELAY_MS`: default 1500
    /// - `KISAN_REPLY_DELAY_MS`: default 1000
    /// - `KISAN_PLAYBACK_MS`: default 2000
    /// - `KISAN_SEED`: unset means OS-seeded
    /// - `KISAN_LANGUAGE`: `en` (default) or `kn`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `KISAN_SEED` or
    /// `KISAN_LANGUAGE` is set but cannot be parsed. Malformed delays fall
    /// back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed = match std::env::var("KISAN_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue { var: "KISAN_SEED", value: raw.clone() })?,
            ),
            Err(_) => None,
        };
        let language = match std::env::var("KISAN_LANGUAGE") {
            Ok(raw) => raw
                .parse::<Language>()
                .map_err(|_| ConfigError::InvalidValue { var: "KISAN_LANGUAGE", value: raw.clone() })?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            step_delay: env_millis("KISAN_STEP_DELAY_MS", DEFAULT_STEP_DELAY_MS),
            market_delay: env_millis("KISAN_MARKET_DELAY_MS", DEFAULT_MARKET_DELAY_MS),
            reply_delay: env_millis("KISAN_REPLY_DELAY_MS", DEFAULT_REPLY_DELAY_MS),
            playback_delay: env_millis("KISAN_PLAYBACK_MS", DEFAULT_PLAYBACK_MS),
            seed,
            language,
        })
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(env_parse(key, default))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
