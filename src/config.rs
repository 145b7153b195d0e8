//! Game configuration from environment variables and command-line flags.
//!
//! Environment variables set the base values; flags override them:
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `MATCH3_WIDTH` | `--width` | 8 |
//! | `MATCH3_HEIGHT` | `--height` | 8 |
//! | `MATCH3_SEED` | `--seed` | 1 |
//! | `MATCH3_KINDS` | `--kinds` | 5 |
//! | `MATCH3_CASCADE_LIMIT` | `--cascade-limit` | 64 |
//! | `MATCH3_EVENT_LOG` | `--event-log` | unset |
//! | `MATCH3_LOG_PATH` | `--log` | unset |
//! | `MATCH3_LOG` | | `info` |
//!
//! `--print` dumps one settled board as text and exits.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use crate::types::{Gem, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board side accepted from configuration.
pub const MAX_SIDE: usize = 64;

/// Fewest gem kinds that can still form a non-trivial board.
pub const MIN_KINDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    /// Number of gem kinds dealt, taken from the front of [`Gem::ALL`].
    pub kinds: usize,
    pub cascade_limit: u32,
    /// JSON-lines file receiving every board event.
    pub event_log: Option<PathBuf>,
    /// Tracing output file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub print_only: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            kinds: 5,
            cascade_limit: 64,
            event_log: None,
            log_path: None,
            log_filter: "info".to_string(),
            print_only: false,
        }
    }
}

impl GameConfig {
    /// Read the `MATCH3_*` environment variables on top of the defaults.
    ///
    /// Ranges are not checked here; [`GameConfig::with_args`] validates the
    /// merged result, so a flag can override a bad variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get("MATCH3_WIDTH") {
            config.width = parse_value("MATCH3_WIDTH", &v)?;
        }
        if let Some(v) = get("MATCH3_HEIGHT") {
            config.height = parse_value("MATCH3_HEIGHT", &v)?;
        }
        if let Some(v) = get("MATCH3_SEED") {
            config.seed = parse_value("MATCH3_SEED", &v)?;
        }
        if let Some(v) = get("MATCH3_KINDS") {
            config.kinds = parse_value("MATCH3_KINDS", &v)?;
        }
        if let Some(v) = get("MATCH3_CASCADE_LIMIT") {
            config.cascade_limit = parse_value("MATCH3_CASCADE_LIMIT", &v)?;
        }
        config.event_log = get("MATCH3_EVENT_LOG").map(PathBuf::from);
        config.log_path = get("MATCH3_LOG_PATH").map(PathBuf::from);
        if let Some(v) = get("MATCH3_LOG") {
            config.log_filter = v;
        }

        Ok(config)
    }

    /// Apply command-line flags on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--print" {
                self.print_only = true;
                i += 1;
                continue;
            }

            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag {
                "--width" => self.width = parse_value(flag, value)?,
                "--height" => self.height = parse_value(flag, value)?,
                "--seed" => self.seed = parse_value(flag, value)?,
                "--kinds" => self.kinds = parse_value(flag, value)?,
                "--cascade-limit" => self.cascade_limit = parse_value(flag, value)?,
                "--event-log" => self.event_log = Some(PathBuf::from(value)),
                "--log" => self.log_path = Some(PathBuf::from(value)),
                other => bail!("unknown argument: {}", other),
            }
            i += 2;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SIDE).contains(&self.width) || !(1..=MAX_SIDE).contains(&self.height) {
            bail!(
                "board size {}x{} out of range (1..={} per side)",
                self.width,
                self.height,
                MAX_SIDE
            );
        }
        if !(MIN_KINDS..=Gem::ALL.len()).contains(&self.kinds) {
            bail!(
                "kinds must be between {} and {} (got {})",
                MIN_KINDS,
                Gem::ALL.len(),
                self.kinds
            );
        }
        if self.cascade_limit == 0 {
            bail!("cascade limit must be at least 1");
        }
        Ok(())
    }

    /// Gems in play.
    pub fn palette(&self) -> Vec<Gem> {
        Gem::ALL[..self.kinds].to_vec()
    }
}

fn parse_value<V: std::str::FromStr>(name: &str, raw: &str) -> Result<V> {
    raw.parse::<V>()
        .map_err(|_| anyhow!("invalid value for {}: {}", name, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.palette().len(), 5);
    }

    #[test]
    fn test_env_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MATCH3_WIDTH", "10"),
            ("MATCH3_HEIGHT", " 6 "),
            ("MATCH3_SEED", "42"),
            ("MATCH3_EVENT_LOG", "events.jsonl"),
            ("MATCH3_LOG_PATH", ""),
        ]))
        .unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 6);
        assert_eq!(config.seed, 42);
        assert_eq!(config.event_log, Some(PathBuf::from("events.jsonl")));
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_env_invalid_value_is_error() {
        let err = GameConfig::from_lookup(lookup(&[("MATCH3_WIDTH", "wide")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for MATCH3_WIDTH: wide");
    }

    #[test]
    fn test_flag_overrides_out_of_range_env() {
        let config = GameConfig::from_lookup(lookup(&[("MATCH3_KINDS", "9")]))
            .and_then(|c| c.with_args(&args(&["--kinds", "4"])))
            .unwrap();
        assert_eq!(config.kinds, 4);

        let err = GameConfig::from_lookup(lookup(&[("MATCH3_KINDS", "9")]))
            .and_then(|c| c.with_args(&[]))
            .unwrap_err();
        assert_eq!(err.to_string(), "kinds must be between 3 and 7 (got 9)");
    }

    #[test]
    fn test_args_override_env() {
        let config = GameConfig::default()
            .with_args(&args(&["--width", "5", "--kinds", "4", "--print"]))
            .unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.kinds, 4);
        assert!(config.print_only);
    }

    #[test]
    fn test_args_errors() {
        let err = GameConfig::default()
            .with_args(&args(&["--seed"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "missing value for --seed");

        let err = GameConfig::default()
            .with_args(&args(&["--colour", "red"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --colour");
    }

    #[test]
    fn test_validation_ranges() {
        assert!(GameConfig::default()
            .with_args(&args(&["--kinds", "2"]))
            .is_err());
        assert!(GameConfig::default()
            .with_args(&args(&["--width", "0"]))
            .is_err());
        assert!(GameConfig::default()
            .with_args(&args(&["--cascade-limit", "0"]))
            .is_err());
    }
}
