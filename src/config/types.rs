use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::users::User;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Actions buffered for slow effect receivers (default: 256).
    #[serde(default = "default_action_capacity")]
    pub action_capacity: usize,
    /// How long to wait for a loader to settle in milliseconds (default: 10000).
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,
}

/// Settings of the simulated users backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Delay before each effect answers, in milliseconds (default: 2000).
    #[serde(default = "default_effect_delay_ms")]
    pub effect_delay_ms: u64,
    /// Id given to the first added user (default: 5).
    #[serde(default = "default_first_user_id")]
    pub first_user_id: u64,
    /// Users returned by a list load.
    #[serde(default = "default_seed_users")]
    pub seed_users: Vec<User>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_action_capacity() -> usize {
    crate::store::DEFAULT_ACTION_CAPACITY
}

fn default_settle_timeout_ms() -> u64 {
    10_000
}

fn default_effect_delay_ms() -> u64 {
    2000
}

fn default_first_user_id() -> u64 {
    5
}

fn default_seed_users() -> Vec<User> {
    vec![
        User::new(1, "Jhon"),
        User::new(2, "Bob"),
        User::new(3, "Fred"),
        User::new(4, "Jack"),
    ]
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            action_capacity: default_action_capacity(),
            settle_timeout_ms: default_settle_timeout_ms(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            effect_delay_ms: default_effect_delay_ms(),
            first_user_id: default_first_user_id(),
            seed_users: default_seed_users(),
        }
    }
}
