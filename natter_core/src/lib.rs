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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Polarity strictly below this bound reads as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.3;

/// Polarity strictly above this bound reads as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.3;

/// Coarse emotional read of a single user message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Mood {
    /// Classify a polarity score against the fixed thresholds.
    ///
    /// Scores in `[NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD]` inclusive are
    /// neutral; only strictly stronger signals route away from the oracle.
    #[must_use]
    pub const fn from_polarity(score: f32) -> Self {
        if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else {
            Self::Neutral
        }
    }

    /// Lowercase label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exchange in a conversation: what the user said, what was answered,
/// and the mood that chose the reply path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// Verbatim user message.
    #[serde(default)]
    pub user: String,
    /// Reply that was shown and spoken. The key is uppercase `AI` on disk.
    #[serde(rename = "AI", default)]
    pub ai: String,
    /// Mood the user message was scored with.
    #[serde(default)]
    pub mood: Mood,
}

impl Turn {
    #[must_use]
    pub fn new(user: impl Into<String>, ai: impl Into<String>, mood: Mood) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            mood,
        }
    }

    /// Whether both sides of the exchange are present. Partial entries can
    /// appear in history files that were edited or truncated by hand.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user.is_empty() && !self.ai.is_empty()
    }
}

/// Failure modes of an [`Oracle::generate`] call.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle process could not be launched at all.
    #[error("could not launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The oracle process ran but reported failure.
    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    /// No reply arrived within the configured deadline.
    #[error("no reply within {seconds}s")]
    TimedOut { seconds: u64 },
    /// The reply bytes were not valid UTF-8.
    #[error("reply was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A model that can continue a composed conversation prompt.
///
/// Implementations wrap whatever produces the text: the local model runner
/// in production, scripted stand-ins in tests.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Produce a reply for the fully composed prompt.
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// Anything that can voice a reply out loud.
#[async_trait]
pub trait SpeechSink: Send + Sync {
    /// Speak the text, returning once playback has finished.
    async fn speak(&self, text: &str) -> anyhow::Result<()>;
}
