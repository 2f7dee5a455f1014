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

//! Speech output through the platform text-to-speech command.

use anyhow::Context;
use async_trait::async_trait;
use natter_core::SpeechSink;
use tokio::process::Command;
use tracing::{debug, info};

/// Voices replies with `say` on macOS and `espeak` on other unix systems.
/// Platforms without a known speech command stay silent.
pub struct SystemVoice {
    voice: String,
}

impl SystemVoice {
    pub fn new(voice: String) -> Self {
        info!("Creating system voice {voice}");
        Self { voice }
    }

    fn playback_command(&self, text: &str) -> Option<Command> {
        #[cfg(target_os = "macos")]
        {
            let mut command = Command::new("say");
            command.arg("-v").arg(&self.voice).arg(text);
            Some(command)
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            // espeak names voices its own way; the configured voice id is
            // macOS-specific and only shows up in logs here.
            debug!("Using espeak; voice {} does not apply", self.voice);
            let mut command = Command::new("espeak");
            command.arg(text);
            Some(command)
        }
        #[cfg(not(unix))]
        {
            let _ = text;
            None
        }
    }
}

#[async_trait]
impl SpeechSink for SystemVoice {
    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let Some(mut command) = self.playback_command(text) else {
            debug!("No speech command on this platform; staying silent");
            return Ok(());
        };

        let status = command
            .status()
            .await
            .context("could not launch the speech command")?;
        if !status.success() {
            anyhow::bail!("speech command exited with {status}");
        }
        Ok(())
    }
}
