//! Error types for the conversation crate.
//!
//! - `AnswerError`: failures reported by an answer service, carried in a
//!   rootcause `Report`
//! - `ConversationError`: rejected controller operations

use ipo_compass_core::RequestId;
use std::fmt;

/// Errors from answer service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The request never reached the service or the connection broke.
    Transport { reason: String },
    /// The service answered with a non-success status.
    Status { status: u16 },
    /// The response body was not the expected payload.
    MalformedPayload { reason: String },
    /// No answer arrived in time.
    Timeout,
    /// The request task ended without producing an answer.
    Aborted { reason: String },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { reason } => {
                write!(f, "answer service unreachable: {reason}")
            }
            Self::Status { status } => {
                write!(f, "answer service returned status {status}")
            }
            Self::MalformedPayload { reason } => {
                write!(f, "malformed answer payload: {reason}")
            }
            Self::Timeout => write!(f, "answer service timed out"),
            Self::Aborted { reason } => write!(f, "answer request aborted: {reason}"),
        }
    }
}

impl std::error::Error for AnswerError {}

/// Errors from controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// The submission was empty after trimming.
    InputRejected,
    /// A completion arrived for a request that is not in flight.
    UnknownRequest { request_id: RequestId },
    /// No tokio runtime is available to run the request.
    NoRuntime,
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRejected => write!(f, "submission is empty"),
            Self::UnknownRequest { request_id } => {
                write!(f, "no request in flight with id {request_id}")
            }
            Self::NoRuntime => write!(f, "no async runtime to dispatch the request on"),
        }
    }
}

impl std::error::Error for ConversationError {}
