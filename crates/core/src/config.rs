//! Process configuration read from the environment.
//!
//! - `CONNECT4_ROWS` / `CONNECT4_COLS`: initial board shape (settings bounds apply)
//! - `CONNECT4_MUSIC`: `0`, `false` or `off` disables the music preference
//! - `CONNECT4_SEED`: speed mode RNG seed
//! - `CONNECT4_LOG_PATH`: log file; logging is off when unset
//! - `CONNECT4_LOG`: log filter directive (default `info`)

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings: Settings,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();

        let rows = parse_usize(&lookup, "CONNECT4_ROWS").unwrap_or(defaults.rows);
        let cols = parse_usize(&lookup, "CONNECT4_COLS").unwrap_or(defaults.cols);
        let music_enabled = lookup("CONNECT4_MUSIC")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(defaults.music_enabled);

        let settings = match defaults.with_dimensions(rows, cols) {
            Ok(s) => Settings { music_enabled, ..s },
            Err(e) => {
                warn!(rows, cols, error = %e, "ignoring configured board size");
                Settings {
                    music_enabled,
                    ..defaults
                }
            }
        };

        let seed = lookup("CONNECT4_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("CONNECT4_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("CONNECT4_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            settings,
            seed,
            log_path,
            log_filter,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn speed_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring non-numeric value");
            None
        }
    }
}
