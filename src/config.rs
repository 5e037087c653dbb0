//! Host configuration read from the environment.
use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::DEFAULT_TICK_MS;

/// Malformed configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Terminal host configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Generator seed; `None` derives one from the clock at startup.
    pub seed: Option<u64>,
    /// Milliseconds between engine ticks.
    pub tick_ms: u64,
    /// Directory the log file is written to.
    pub log_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: DEFAULT_TICK_MS,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl HostConfig {
    pub const SEED: &'static str = "PLAINTRIS_SEED";
    pub const TICK_MS: &'static str = "PLAINTRIS_TICK_MS";
    pub const LOG_DIR: &'static str = "PLAINTRIS_LOG_DIR";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLAINTRIS_SEED` - generator seed (default: from the clock)
    /// - `PLAINTRIS_TICK_MS` - tick interval in milliseconds (default: 250)
    /// - `PLAINTRIS_LOG_DIR` - log directory (default: `logs`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = lookup(Self::SEED) {
            config.seed = Some(parse_number(Self::SEED, &seed)?);
        }

        if let Some(tick) = lookup(Self::TICK_MS) {
            let tick_ms = parse_number(Self::TICK_MS, &tick)?;
            if tick_ms == 0 {
                return Err(ConfigError::Zero { key: Self::TICK_MS });
            }
            config.tick_ms = tick_ms;
        }

        if let Some(dir) = lookup(Self::LOG_DIR).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.tick_ms, 250);
    }

    #[test]
    fn reads_all_values() {
        let config = HostConfig::from_lookup(lookup(&[
            ("PLAINTRIS_SEED", "42"),
            ("PLAINTRIS_TICK_MS", " 100 "),
            ("PLAINTRIS_LOG_DIR", "/tmp/plaintris"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/plaintris"));
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = HostConfig::from_lookup(lookup(&[("PLAINTRIS_SEED", "abc")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "PLAINTRIS_SEED",
                value: "abc".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "PLAINTRIS_SEED must be an unsigned integer, got \"abc\""
        );
    }

    #[test]
    fn rejects_zero_tick() {
        let err = HostConfig::from_lookup(lookup(&[("PLAINTRIS_TICK_MS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { key: "PLAINTRIS_TICK_MS" });
    }

    #[test]
    fn blank_log_dir_keeps_default() {
        let config = HostConfig::from_lookup(lookup(&[("PLAINTRIS_LOG_DIR", "  ")])).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }
}
