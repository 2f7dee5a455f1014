//! Prompt assembly with a bounded context window.

use crate::history::ConversationHistory;

/// Builds oracle prompts from the tail of the conversation log.
///
/// The prompt is plain text: the windowed turns as `"<user> <ai> "` pairs,
/// then `"User: <input> AI:"` so the model answers as a continuation. The
/// trailing `AI:` carries no space; models echo leading whitespace back.
#[derive(Debug, Clone, Copy)]
pub struct PromptComposer {
    window: usize,
}

impl PromptComposer {
    /// `window` is the most-recent-turn count eligible for the prompt.
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Compose the prompt for `input` given the log so far.
    ///
    /// The window is taken first, then partial turns inside it are skipped.
    /// A hand-damaged entry costs its slot rather than pulling an older
    /// turn back into context.
    #[must_use]
    pub fn compose(&self, history: &ConversationHistory, input: &str) -> String {
        let turns = history.turns();
        let start = turns.len().saturating_sub(self.window);

        let mut prompt = String::new();
        for turn in turns[start..].iter().filter(|turn| turn.is_complete()) {
            prompt.push_str(&turn.user);
            prompt.push(' ');
            prompt.push_str(&turn.ai);
            prompt.push(' ');
        }
        prompt.push_str("User: ");
        prompt.push_str(input);
        prompt.push_str(" AI:");
        prompt
    }
}
