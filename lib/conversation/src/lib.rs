//! Conversation pipeline for the ipo-compass assistant widget.
//!
//! This crate provides:
//!
//! - **Controller**: turns submissions into answer-service requests and
//!   settled requests into transcript entries
//! - **Transcript**: the append-only log of user and assistant entries
//! - **View sink**: the effects a host surface renders (appends, typing
//!   indicator, scrolling)
//! - **Answer service**: the trait the remote question answerer implements

pub mod controller;
pub mod error;
pub mod pending;
pub mod service;
pub mod suggestion;
pub mod transcript;
pub mod view;

pub use controller::{Completion, Controller, FALLBACK_MESSAGE};
pub use error::{AnswerError, ConversationError};
pub use pending::{PENDING_INDICATOR_ID, PendingIndicator};
pub use service::{AnswerService, MockAnswerService};
pub use suggestion::{DEFAULT_SUGGESTIONS, Suggestions};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
pub use view::{RecordingView, ViewEvent, ViewSink};
