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

//! Lexicon-based sentiment scoring for short chat messages.
//!
//! The scorer averages the valence of recognized words, flips words behind
//! negators, and scales words behind intensifiers. Scores land in
//! `[-1.0, 1.0]`; text without a single recognized word scores `0.0`.

mod analyzer;
mod lexicon;

pub use analyzer::{SentimentAnalyzer, SentimentError};
