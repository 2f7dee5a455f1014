//! Dialogue orchestration: mood gating, oracle routing, persistence,
//! and the interactive loop.

use crate::history::{ConversationHistory, HistoryError, HistoryStore};
use crate::prompt::PromptComposer;
use natter_core::{Mood, Oracle, SpeechSink, Turn};
use natter_sentiment::SentimentAnalyzer;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Opening line of the interactive loop.
pub const BANNER: &str = "Chat with AI. Type 'exit' to end the conversation.";

/// Fixed reply for strongly negative input. The oracle is not consulted.
pub const NEGATIVE_REPLY: &str = "I sense some frustration. I'm here to assist you.";

/// Fixed reply for strongly positive input. The oracle is not consulted.
pub const POSITIVE_REPLY: &str = "I'm glad to hear your positivity! Let's continue.";

/// Reply recorded when the oracle produces nothing usable.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble reaching my language model right now. Let's try again in a moment.";

const EXIT_SENTINEL: &str = "exit";

/// True when a trimmed input line asks to end the conversation.
#[must_use]
pub fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Configuration for dialogue management.
#[derive(Debug, Clone)]
pub struct DialogueConfig {
    /// Most recent turns eligible for each oracle prompt.
    pub interaction_memory: usize,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            interaction_memory: 10,
        }
    }
}

impl DialogueConfig {
    /// Set the prompt window size.
    #[must_use]
    pub const fn with_interaction_memory(mut self, turns: usize) -> Self {
        self.interaction_memory = turns;
        self
    }
}

/// Errors that end a conversation.
///
/// Oracle trouble is deliberately absent: an unreachable model becomes
/// [`FALLBACK_REPLY`], not an error, so one hiccup does not end the session.
/// Losing a turn on disk would, which is why persistence failures do.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("could not persist the conversation: {0}")]
    Persist(#[from] HistoryError),

    #[error("could not read from the terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Which path produced a turn's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// Canned reply for a strongly negative message.
    CannedNegative,
    /// Canned reply for a strongly positive message.
    CannedPositive,
    /// The oracle answered.
    Oracle,
    /// The oracle failed or answered blank; the fallback reply was used.
    Fallback,
}

/// Result of processing a dialogue turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Reply recorded for the turn.
    pub response: String,
    /// Mood the user message was scored with.
    pub mood: Mood,
    /// Which path produced the reply.
    pub source: ResponseSource,
    /// Turn number, counting from 1 and across resumed sessions.
    pub turn_number: usize,
}

/// Mood-gated dialogue driver.
///
/// Each turn is scored, answered (canned reply or oracle continuation),
/// appended to the log, and persisted before the reply is surfaced.
pub struct DialogueManager<O, S> {
    oracle: O,
    speech: S,
    store: HistoryStore,
    history: ConversationHistory,
    composer: PromptComposer,
    analyzer: SentimentAnalyzer,
}

impl<O, S> DialogueManager<O, S>
where
    O: Oracle,
    S: SpeechSink,
{
    /// Create a manager, resuming whatever the store already holds.
    pub fn new(
        oracle: O,
        speech: S,
        store: HistoryStore,
        analyzer: SentimentAnalyzer,
        config: DialogueConfig,
    ) -> Self {
        let history = store.load();
        info!("Resuming conversation with {} prior turns", history.len());

        Self {
            oracle,
            speech,
            store,
            history,
            composer: PromptComposer::new(config.interaction_memory),
            analyzer,
        }
    }

    /// Current log, oldest turn first.
    #[must_use]
    pub const fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Process one user message: gate on mood, pick the reply, record and
    /// persist the turn.
    pub async fn process_turn(&mut self, input: &str) -> Result<TurnResult, DialogueError> {
        let polarity = self.analyzer.score(input);
        let mood = Mood::from_polarity(polarity);
        debug!("Input scored {polarity:.3} ({mood})");

        let (response, source) = match mood {
            Mood::Negative => (NEGATIVE_REPLY.to_string(), ResponseSource::CannedNegative),
            Mood::Positive => (POSITIVE_REPLY.to_string(), ResponseSource::CannedPositive),
            Mood::Neutral => self.consult_oracle(input).await,
        };

        self.history.push(Turn::new(input, response.clone(), mood));
        self.store.save(&self.history)?;

        let turn_number = self.history.len();
        debug!("Turn {turn_number} persisted");

        Ok(TurnResult {
            response,
            mood,
            source,
            turn_number,
        })
    }

    async fn consult_oracle(&self, input: &str) -> (String, ResponseSource) {
        let prompt = self.composer.compose(&self.history, input);
        debug!(
            "Asking {} with {} prompt chars",
            self.oracle.model(),
            prompt.len()
        );

        match self.oracle.generate(&prompt).await {
            Ok(reply) if reply.trim().is_empty() => {
                warn!("Oracle replied with empty output; using the fallback reply");
                (FALLBACK_REPLY.to_string(), ResponseSource::Fallback)
            }
            Ok(reply) => (reply, ResponseSource::Oracle),
            Err(e) => {
                warn!("Oracle unavailable: {e}; using the fallback reply");
                (FALLBACK_REPLY.to_string(), ResponseSource::Fallback)
            }
        }
    }

    /// Speak a reply, logging instead of failing when audio is unavailable.
    pub async fn speak(&self, text: &str) {
        if let Err(e) = self.speech.speak(text).await {
            warn!("Speech output failed: {e}");
        }
    }

    /// Run the interactive loop until `exit` or end of input.
    ///
    /// Each reply is printed, then spoken to completion before the next
    /// prompt appears.
    pub async fn run_interactive(&mut self) -> Result<(), DialogueError> {
        println!("{BANNER}");

        loop {
            print!("You: ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            let bytes = std::io::stdin().read_line(&mut line)?;
            if bytes == 0 {
                // End of input reads as a goodbye.
                println!();
                break;
            }

            let input = line.trim();
            if is_exit_command(input) {
                break;
            }
            if input.is_empty() {
                continue;
            }

            let result = self.process_turn(input).await?;
            println!("AI: {}", result.response);
            self.speak(&result.response).await;
        }

        info!(
            "Conversation ended with {} turns on record",
            self.history.len()
        );
        Ok(())
    }
}
