//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Retry policy for transient storage failures.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Report defaults.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Retry policy for transient storage failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff between attempts, in milliseconds. Attempt N waits
    /// `backoff_ms * N` before retrying.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    50
}

/// Report defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Whether ledger and trial-balance queries include only posted entries
    /// by default.
    #[serde(default = "default_posted_only")]
    pub posted_only: bool,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            posted_only: default_posted_only(),
        }
    }
}

fn default_posted_only() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CUADRE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
