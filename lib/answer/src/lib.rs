//! HTTP client for the ipo-compass answer service.
//!
//! The answer service is the server route that forwards a question to an
//! AI provider:
//!
//! ```text
//! GET {base_url}/get-response/?message=<query>
//! 200 {"response": "<answer text>"}
//! ```
//!
//! [`HttpAnswerService`] implements
//! [`AnswerService`](ipo_compass_conversation::AnswerService) on top of it.

pub mod client;
pub mod config;

pub use client::HttpAnswerService;
pub use config::AnswerClientConfig;
