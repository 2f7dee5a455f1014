use async_trait::async_trait;
use natter_core::{Oracle, OracleError};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

/// Model used when the command line does not name one.
pub const DEFAULT_MODEL: &str = "llama3.2";

const DEFAULT_PROGRAM: &str = "ollama";

/// Oracle backed by the local Ollama runner.
///
/// Each prompt is answered by one `ollama run <model> <prompt>` child
/// process; the reply is its trimmed stdout.
pub struct OllamaOracle {
    program: String,
    model: String,
    timeout: Duration,
}

impl OllamaOracle {
    pub fn new(model: String, timeout: Duration) -> Self {
        info!("Creating Ollama oracle for model {model}");
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            model,
            timeout,
        }
    }

    /// Override the executable: a full path, or a stand-in under test.
    #[must_use]
    pub fn with_program(mut self, program: String) -> Self {
        self.program = program;
        self
    }
}

#[async_trait]
impl Oracle for OllamaOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        debug!(
            "Running {} run {} with {} prompt chars",
            self.program,
            self.model,
            prompt.len()
        );

        let mut command = Command::new(&self.program);
        command.arg("run").arg(&self.model).arg(prompt);
        // A child that misses the deadline must not outlive the turn.
        command.kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(finished) => finished.map_err(|source| OracleError::Spawn {
                program: self.program.clone(),
                source,
            })?,
            Err(_) => {
                return Err(OracleError::TimedOut {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            return Err(OracleError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(stdout.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}
