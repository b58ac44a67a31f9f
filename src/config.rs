//! Runtime configuration.
//!
//! Defaults can be overridden through `STUDY_BUDDY_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DB_PATH_VAR: &str = "STUDY_BUDDY_DB";
pub const DELAY_MS_VAR: &str = "STUDY_BUDDY_DELAY_MS";
pub const SEED_VAR: &str = "STUDY_BUDDY_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite file backing the topic store
    pub database_path: PathBuf,
    /// Pause before materials are generated
    pub generation_delay: Duration,
    /// Fixed seed for the quiz option shuffle; entropy-seeded when `None`
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("study_buddy.sqlite3"),
            generation_delay: Duration::from_millis(1500),
            shuffle_seed: None,
        }
    }
}

impl Config {
    /// Builds a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(DELAY_MS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.generation_delay = Duration::from_millis(ms),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", DELAY_MS_VAR, raw, e),
            }
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.shuffle_seed = Some(seed),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.generation_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (DB_PATH_VAR, "/tmp/topics.db"),
            (DELAY_MS_VAR, "0"),
            (SEED_VAR, "42"),
        ]));
        assert_eq!(config.database_path, PathBuf::from("/tmp/topics.db"));
        assert_eq!(config.generation_delay, Duration::ZERO);
        assert_eq!(config.shuffle_seed, Some(42));
    }

    #[test]
    fn test_bad_numbers_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[(DELAY_MS_VAR, "soon"), (SEED_VAR, "-1")]));
        assert_eq!(config.generation_delay, Duration::from_millis(1500));
        assert_eq!(config.shuffle_seed, None);
    }
}
