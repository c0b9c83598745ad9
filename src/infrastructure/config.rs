//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON document holding heroes and missions
    pub data_path: PathBuf,
    /// Pause between replayed battle log lines
    pub turn_delay: Duration,
    /// Fixed RNG seed for reproducible battles, stories and missions
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            data_path: lookup("HERO_FORGE_DATA_PATH")
                .unwrap_or_else(|| "forjador-db.json".to_string())
                .into(),

            turn_delay: Duration::from_millis(
                lookup("HERO_FORGE_TURN_DELAY_MS")
                    .unwrap_or_else(|| "1500".to_string())
                    .parse()
                    .context("HERO_FORGE_TURN_DELAY_MS must be a number of milliseconds")?,
            ),

            rng_seed: lookup("HERO_FORGE_RNG_SEED")
                .map(|seed| seed.parse())
                .transpose()
                .context("HERO_FORGE_RNG_SEED must be an unsigned integer")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.data_path, PathBuf::from("forjador-db.json"));
        assert_eq!(config.turn_delay, Duration::from_millis(1500));
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HERO_FORGE_DATA_PATH", "/tmp/forge.json"),
            ("HERO_FORGE_TURN_DELAY_MS", "0"),
            ("HERO_FORGE_RNG_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/forge.json"));
        assert_eq!(config.turn_delay, Duration::ZERO);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(config(&[("HERO_FORGE_TURN_DELAY_MS", "soon")]).is_err());
        assert!(config(&[("HERO_FORGE_RNG_SEED", "-1")]).is_err());
    }
}
