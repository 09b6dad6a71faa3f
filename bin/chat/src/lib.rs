//! Terminal host for the ipo-compass assistant.
//!
//! Wires the conversation controller to stdin/stdout and the HTTP answer
//! service. Useful for exercising the answer endpoint without a browser.

pub mod command;
pub mod config;
pub mod repl;
pub mod terminal;
