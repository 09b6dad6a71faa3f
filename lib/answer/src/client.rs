//! reqwest-backed answer service.

use crate::config::AnswerClientConfig;
use async_trait::async_trait;
use ipo_compass_conversation::{AnswerError, AnswerService};
use ipo_compass_core::Result;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Body returned by the answer endpoint.
#[derive(Debug, Deserialize)]
struct AnswerPayload {
    response: String,
}

/// Answer service reached over HTTP.
///
/// Provider failures on the server side come back as ordinary `200`
/// answers (a warning sentence in `response`) and are passed through as
/// replies. Only transport, status and payload problems are errors here.
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerService {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &AnswerClientConfig) -> Result<Self, AnswerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnswerError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// The URL queries are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    #[instrument(skip(self, query), fields(endpoint = %self.endpoint, query_len = query.len()))]
    async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("message", query)])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "answer service rejected query");
            return Err(AnswerError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(request_error)?;
        let payload: AnswerPayload =
            serde_json::from_str(&body).map_err(|e| AnswerError::MalformedPayload {
                reason: e.to_string(),
            })?;

        debug!(reply_len = payload.response.len(), "answer received");
        Ok(payload.response)
    }
}

fn request_error(error: reqwest::Error) -> AnswerError {
    if error.is_timeout() {
        AnswerError::Timeout
    } else {
        AnswerError::Transport {
            reason: error.to_string(),
        }
    }
}
