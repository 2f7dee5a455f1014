//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate zero-sized strategy type, dispatched statically.
//! Inputs travel through an associated type instead of trait objects, so
//! adding a command never touches the existing ones.

use natter_config::Config;
use natter_conversation::{DialogueConfig, DialogueManager, HistoryStore};
use natter_providers::{DEFAULT_MODEL, OllamaOracle};
use natter_sentiment::SentimentAnalyzer;
use natter_speech::SystemVoice;
use std::path::Path;
use std::time::Duration;
use tracing::info;

mod chat;
mod info;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// The dialogue stack behind the `chat` command.
type Companion = DialogueManager<OllamaOracle, SystemVoice>;

/// Load the effective config and assemble the dialogue manager from it.
fn build_companion(config_path: &Path, model: Option<String>) -> anyhow::Result<Companion> {
    let config = Config::load_or_default(config_path);
    info!(
        "Using model {} with a {}-turn window",
        model.as_deref().unwrap_or(DEFAULT_MODEL),
        config.interaction_memory
    );

    let analyzer = SentimentAnalyzer::new()?;
    let oracle = OllamaOracle::new(
        model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        Duration::from_secs(config.timeout),
    );
    let dialogue_config =
        DialogueConfig::default().with_interaction_memory(config.interaction_memory);
    let speech = SystemVoice::new(config.voice);
    let store = HistoryStore::new(config.history_file);

    Ok(DialogueManager::new(
        oracle,
        speech,
        store,
        analyzer,
        dialogue_config,
    ))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
