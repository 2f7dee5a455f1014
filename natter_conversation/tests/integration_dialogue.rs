//! Integration tests for the dialogue flow.
//!
//! These tests verify the complete path of a turn:
//! - Mood gating between canned replies and the oracle
//! - Prompt windowing over the persisted log
//! - Fallback behavior when the oracle is unavailable
//! - Durability of the history file across restarts

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use natter_conversation::{
    DialogueConfig, DialogueError, DialogueManager, FALLBACK_REPLY, HistoryStore, NEGATIVE_REPLY,
    POSITIVE_REPLY, ResponseSource,
};
use natter_core::{Mood, Oracle, OracleError, SpeechSink};
use natter_sentiment::SentimentAnalyzer;
use tempfile::TempDir;

/// Oracle stand-in that records every prompt and answers from a script.
struct ScriptedOracle {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(OracleError::TimedOut { seconds: 30 }),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Speech sink that records instead of playing audio.
struct MuteSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl SpeechSink for MuteSpeech {
    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Speech sink that always fails, as on a machine with no audio at all.
struct BrokenSpeech;

#[async_trait]
impl SpeechSink for BrokenSpeech {
    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("no audio device")
    }
}

type Recorded = Arc<Mutex<Vec<String>>>;

fn scripted_manager(
    dir: &TempDir,
    reply: Option<&str>,
    window: usize,
) -> (DialogueManager<ScriptedOracle, MuteSpeech>, Recorded, Recorded) {
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let spoken = Arc::new(Mutex::new(Vec::new()));

    let oracle = ScriptedOracle {
        reply: reply.map(str::to_string),
        prompts: prompts.clone(),
    };
    let speech = MuteSpeech {
        spoken: spoken.clone(),
    };
    let store = HistoryStore::new(dir.path().join("history.json"));
    let analyzer = SentimentAnalyzer::new().unwrap();
    let config = DialogueConfig::default().with_interaction_memory(window);

    let manager = DialogueManager::new(oracle, speech, store, analyzer, config);
    (manager, prompts, spoken)
}

/// A neutral question goes to the oracle and its reply is recorded.
#[tokio::test]
async fn test_neutral_turn_consults_the_oracle() {
    let dir = TempDir::new().unwrap();
    let (mut manager, prompts, _) = scripted_manager(&dir, Some("Paris."), 10);

    let result = manager
        .process_turn("What is the capital of France?")
        .await
        .unwrap();

    assert_eq!(result.response, "Paris.");
    assert_eq!(result.mood, Mood::Neutral);
    assert_eq!(result.source, ResponseSource::Oracle);
    assert_eq!(result.turn_number, 1);

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0], "User: What is the capital of France? AI:");
}

/// Strongly negative input short-circuits to the canned reply.
#[tokio::test]
async fn test_negative_turn_skips_the_oracle() {
    let dir = TempDir::new().unwrap();
    let (mut manager, prompts, _) = scripted_manager(&dir, Some("unused"), 10);

    let result = manager.process_turn("I hate this").await.unwrap();

    assert_eq!(result.response, NEGATIVE_REPLY);
    assert_eq!(result.mood, Mood::Negative);
    assert_eq!(result.source, ResponseSource::CannedNegative);
    assert!(prompts.lock().unwrap().is_empty());
}

/// Strongly positive input short-circuits to the canned reply.
#[tokio::test]
async fn test_positive_turn_skips_the_oracle() {
    let dir = TempDir::new().unwrap();
    let (mut manager, prompts, _) = scripted_manager(&dir, Some("unused"), 10);

    let result = manager.process_turn("This is wonderful!").await.unwrap();

    assert_eq!(result.response, POSITIVE_REPLY);
    assert_eq!(result.mood, Mood::Positive);
    assert_eq!(result.source, ResponseSource::CannedPositive);
    assert!(prompts.lock().unwrap().is_empty());
}

/// An unreachable oracle becomes the fallback reply, and the session
/// keeps going afterwards.
#[tokio::test]
async fn test_oracle_failure_becomes_the_fallback_reply() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _, _) = scripted_manager(&dir, None, 10);

    let result = manager.process_turn("tell me about rust").await.unwrap();
    assert_eq!(result.response, FALLBACK_REPLY);
    assert_eq!(result.source, ResponseSource::Fallback);
    assert_eq!(result.mood, Mood::Neutral);

    // The failed-oracle turn is still a recorded turn.
    let next = manager.process_turn("still there?").await.unwrap();
    assert_eq!(next.turn_number, 2);
}

/// Blank oracle output counts as unavailable.
#[tokio::test]
async fn test_blank_oracle_output_becomes_the_fallback_reply() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _, _) = scripted_manager(&dir, Some("   \n"), 10);

    let result = manager.process_turn("tell me about rust").await.unwrap();

    assert_eq!(result.response, FALLBACK_REPLY);
    assert_eq!(result.source, ResponseSource::Fallback);
}

/// The prompt carries only the last `interaction_memory` turns.
#[tokio::test]
async fn test_prompt_window_covers_recent_turns_only() {
    let dir = TempDir::new().unwrap();
    let (mut manager, prompts, _) = scripted_manager(&dir, Some("ok"), 2);

    manager.process_turn("describe rust").await.unwrap();
    manager.process_turn("describe go").await.unwrap();
    manager.process_turn("describe zig").await.unwrap();
    manager.process_turn("describe c").await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(
        prompts[3],
        "describe go ok describe zig ok User: describe c AI:"
    );
}

/// Canned turns still count toward the prompt window.
#[tokio::test]
async fn test_canned_turns_enter_the_prompt_window() {
    let dir = TempDir::new().unwrap();
    let (mut manager, prompts, _) = scripted_manager(&dir, Some("ok"), 10);

    manager.process_turn("I hate this").await.unwrap();
    manager.process_turn("say something").await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(
        prompts[0],
        format!("I hate this {NEGATIVE_REPLY} User: say something AI:")
    );
}

/// Turns persist across a full restart, and the resumed session keeps
/// counting and keeps its context.
#[tokio::test]
async fn test_restart_resumes_the_conversation() {
    let dir = TempDir::new().unwrap();

    {
        let (mut manager, _, _) = scripted_manager(&dir, Some("ok"), 10);
        manager.process_turn("remember the blue key").await.unwrap();
        manager.process_turn("and the red door").await.unwrap();
    }

    let (mut manager, prompts, _) = scripted_manager(&dir, Some("ok"), 10);
    assert_eq!(manager.history().len(), 2);

    let result = manager.process_turn("what did I mention?").await.unwrap();
    assert_eq!(result.turn_number, 3);

    let prompts = prompts.lock().unwrap();
    assert!(prompts[0].contains("remember the blue key"));
    assert!(prompts[0].contains("and the red door"));
}

/// A corrupt history file means a fresh start, not a crash, and the next
/// save produces a valid file again.
#[tokio::test]
async fn test_corrupt_history_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("history.json"), "definitely not json").unwrap();

    let (mut manager, _, _) = scripted_manager(&dir, Some("ok"), 10);
    assert!(manager.history().is_empty());

    manager.process_turn("hello again").await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

/// Failing to persist a turn is an error, not a silent loss.
#[tokio::test]
async fn test_save_failure_is_fatal() {
    let dir = TempDir::new().unwrap();

    let prompts = Arc::new(Mutex::new(Vec::new()));
    let oracle = ScriptedOracle {
        reply: Some("ok".to_string()),
        prompts,
    };
    let speech = MuteSpeech {
        spoken: Arc::new(Mutex::new(Vec::new())),
    };
    // The store points at a directory, so every save must fail.
    let store = HistoryStore::new(dir.path().to_path_buf());
    let analyzer = SentimentAnalyzer::new().unwrap();

    let mut manager =
        DialogueManager::new(oracle, speech, store, analyzer, DialogueConfig::default());

    let result = manager.process_turn("hello").await;
    assert!(matches!(result, Err(DialogueError::Persist(_))));
}

/// Speaking records the reply through the sink.
#[tokio::test]
async fn test_replies_are_handed_to_the_speech_sink() {
    let dir = TempDir::new().unwrap();
    let (manager, _, spoken) = scripted_manager(&dir, Some("ok"), 10);

    manager.speak("good evening").await;

    assert_eq!(spoken.lock().unwrap().as_slice(), ["good evening"]);
}

/// A dead speech sink is logged, never propagated.
#[tokio::test]
async fn test_speech_failure_is_swallowed() {
    let dir = TempDir::new().unwrap();

    let oracle = ScriptedOracle {
        reply: Some("ok".to_string()),
        prompts: Arc::new(Mutex::new(Vec::new())),
    };
    let store = HistoryStore::new(dir.path().join("history.json"));
    let analyzer = SentimentAnalyzer::new().unwrap();

    let manager = DialogueManager::new(
        oracle,
        BrokenSpeech,
        store,
        analyzer,
        DialogueConfig::default(),
    );

    // Must not panic or surface the sink error.
    manager.speak("anyone listening?").await;
}

/// The recorded log tallies moods for the stats readout.
#[tokio::test]
async fn test_history_stats_follow_the_turns() {
    let dir = TempDir::new().unwrap();
    let (mut manager, _, _) = scripted_manager(&dir, Some("ok"), 10);

    manager.process_turn("I hate this").await.unwrap();
    manager.process_turn("This is wonderful!").await.unwrap();
    manager.process_turn("tell me a fact").await.unwrap();

    let stats = manager.history().stats();
    assert_eq!(stats.turns, 3);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.positive, 1);
    assert_eq!(stats.neutral, 1);
}
