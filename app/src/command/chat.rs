//! The conversation command: interactive loop or a single exchange.
//!
//! Both modes share one persistent history file, so a scripted
//! `natter chat -m "..."` turn lands in the same conversation the
//! interactive loop resumes later.

use natter_conversation::is_exit_command;
use std::path::PathBuf;
use tracing::info;

use super::build_companion;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional model override
    pub model: Option<String>,
    /// Config file location
    pub config_path: PathBuf,
}

/// Strategy for executing the Chat command.
///
/// Interactive mode runs the mood-gated loop until `exit`; single-message
/// mode processes one turn and prints the bare reply.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut companion = build_companion(&input.config_path, input.model)?;

        if let Some(message) = input.message {
            let message = message.trim().to_string();
            // The exit word is a loop control, not a message; sending it
            // non-interactively is a no-op rather than a recorded turn.
            if message.is_empty() || is_exit_command(&message) {
                return Ok(());
            }

            let result = companion.process_turn(&message).await?;
            println!("{}", result.response);
            companion.speak(&result.response).await;
            info!("Turn {} completed", result.turn_number);
        } else {
            companion.run_interactive().await?;
        }

        Ok(())
    }
}
