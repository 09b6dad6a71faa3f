//! Core types shared by the ipo-compass crates.
//!
//! This crate provides the error-handling foundation and the strongly
//! typed identifiers used by the conversation pipeline.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{EntryId, ParseIdError, RequestId};
