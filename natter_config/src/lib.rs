#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! JSON configuration for the natter companion.
//!
//! A missing or broken config file is never fatal: callers that want the
//! forgiving behavior use [`Config::load_or_default`], which falls back to
//! the built-in defaults and leaves a note in the logs.

mod schema;

pub use schema::{
    Config, ConfigError, DEFAULT_HISTORY_FILE, DEFAULT_INTERACTION_MEMORY, DEFAULT_TIMEOUT_SECS,
    DEFAULT_VOICE,
};
