//! Host configuration.
//!
//! Loaded via the `config` crate from environment variables, with `__`
//! separating nested keys:
//!
//! ```text
//! ANSWER__BASE_URL=http://127.0.0.1:8000
//! ANSWER__TIMEOUT_SECS=45
//! LOG_FILTER=debug
//! ```

use ipo_compass_answer::AnswerClientConfig;
use serde::Deserialize;

/// Host configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ChatConfig {
    /// Answer service client configuration.
    #[serde(default)]
    pub answer: AnswerClientConfig,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl ChatConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
