//! Answer service abstraction.
//!
//! The answer service is an opaque text-in/text-out collaborator. The
//! controller only needs to tell a reply apart from a failure; how the
//! query travels is up to the implementation.

use crate::error::AnswerError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Trait for answer services.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Answers a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, reports a
    /// failure status, or sends a payload that cannot be read.
    async fn ask(&self, query: &str) -> ipo_compass_core::Result<String, AnswerError>;
}

/// An answer service with a fixed reply, recording every query it sees.
#[derive(Debug)]
pub struct MockAnswerService {
    reply: Result<String, AnswerError>,
    queries: Mutex<Vec<String>>,
}

impl MockAnswerService {
    /// Creates a mock that always answers with `reply`.
    #[must_use]
    pub fn succeeding(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that always fails with `error`.
    #[must_use]
    pub fn failing(error: AnswerError) -> Self {
        Self {
            reply: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the queries received so far, in arrival order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    async fn ask(&self, query: &str) -> ipo_compass_core::Result<String, AnswerError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(error) => Err(error.clone().into()),
        }
    }
}
