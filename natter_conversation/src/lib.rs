#![warn(
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

//! Mood-gated dialogue with a durable conversation log.
//!
//! A turn moves through three stages: the user message is scored for
//! sentiment, the reply is chosen (a canned reply for strong feelings, an
//! oracle continuation otherwise), and the exchange is appended to a JSON
//! log on disk before anything is shown or spoken.
//!
//! # Key pieces
//! - [`DialogueManager`] drives turns and the interactive loop
//! - [`HistoryStore`] owns the JSON log file
//! - [`PromptComposer`] folds the recent log into each oracle prompt

mod history;
mod manager;
mod prompt;

pub use history::{
    ConversationHistory, HistoryError, HistoryLoadError, HistoryStats, HistoryStore,
};
pub use manager::{
    BANNER, DialogueConfig, DialogueError, DialogueManager, FALLBACK_REPLY, NEGATIVE_REPLY,
    POSITIVE_REPLY, ResponseSource, TurnResult, is_exit_command,
};
pub use prompt::PromptComposer;
