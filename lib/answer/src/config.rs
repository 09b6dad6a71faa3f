//! Answer client configuration.

use serde::Deserialize;

/// Where and how to reach the answer service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerClientConfig {
    /// Scheme, host and port of the server, e.g. `http://127.0.0.1:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route of the answer endpoint.
    #[serde(default = "default_path")]
    pub path: String,

    /// Whole-request timeout in seconds. Provider round trips are slow.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_path() -> String {
    "/get-response/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AnswerClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnswerClientConfig {
    /// Creates a configuration for `base_url` with default route and timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL of the answer endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let config = AnswerClientConfig::default();
        assert_eq!(config.endpoint(), "http://127.0.0.1:8000/get-response/");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AnswerClientConfig::new("https://compass.example/");
        assert_eq!(config.endpoint(), "https://compass.example/get-response/");
    }

    #[test]
    fn deserialize_fills_defaults() {
        let config: AnswerClientConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.5:9000"}"#).expect("deserialize");
        assert_eq!(config.path, "/get-response/");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.endpoint(), "http://10.0.0.5:9000/get-response/");
    }
}
