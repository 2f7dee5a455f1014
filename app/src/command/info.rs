use natter_config::Config;
use natter_conversation::HistoryStore;
use natter_providers::DEFAULT_MODEL;
use std::path::PathBuf;

/// Strategy for displaying the effective configuration.
///
/// Shows the settings `chat` would run with and a mood tally of the
/// recorded history.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = PathBuf;

    async fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default(&config_path);

        println!("=== natter Configuration ===\n");

        println!("Voice: {}", config.voice);
        println!("History File: {}", config.history_file.display());
        println!("Interaction Memory: {} turns", config.interaction_memory);
        println!(
            "Oracle: {DEFAULT_MODEL} via ollama, {}s timeout",
            config.timeout
        );
        println!();

        let stats = HistoryStore::new(config.history_file).load().stats();
        println!("History:");
        println!("  Turns: {}", stats.turns);
        println!("  Negative: {}", stats.negative);
        println!("  Neutral: {}", stats.neutral);
        println!("  Positive: {}", stats.positive);

        Ok(())
    }
}
