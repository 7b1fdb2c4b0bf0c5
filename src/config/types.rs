use crate::data::Reward;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container. Every section is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Rewards offered by the store. Empty means the built-in catalog.
    #[serde(default)]
    pub catalog: Vec<Reward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Settings for the in-memory reward source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Simulated latency of every query in milliseconds (default: 600).
    #[serde(default = "default_fetch_latency_ms")]
    pub fetch_latency_ms: u64,
    /// When set, every query fails with this message.
    #[serde(default)]
    pub fail_with: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Offer "copy to clipboard" in the share chooser (default: true).
    #[serde(default = "default_true")]
    pub clipboard: bool,
    /// Offer "save to outbox", appending JSON lines to this file.
    #[serde(default)]
    pub outbox: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<data_local_dir>/jetreward/jetreward.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_fetch_latency_ms() -> u64 {
    600
}

fn default_true() -> bool {
    true
}

fn default_profile_name() -> String {
    "Jetpack Compose Learner".to_string()
}

fn default_profile_email() -> String {
    "learner@dicoding.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: default_fetch_latency_ms(),
            fail_with: None,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            clipboard: default_true(),
            outbox: None,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            email: default_profile_email(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
