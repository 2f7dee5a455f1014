use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Voice identifier handed to the system speech command.
pub const DEFAULT_VOICE: &str = "com.apple.voice.compact.en-US.Samantha";

/// History file path, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "conversation_history.json";

/// How many past turns are carried into each oracle prompt.
pub const DEFAULT_INTERACTION_MEMORY: usize = 10;

/// How long to wait for the oracle before giving up, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),
    #[error("config file at {path} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file at {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file at {path} is invalid: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("config file already exists at {0}")]
    AlreadyExists(PathBuf),
    #[error("could not write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runtime settings for the companion.
///
/// Parsing is strict: a config file must spell out every key, or it is
/// rejected as a whole and the defaults apply instead. Partial files were
/// silently half-honored once and that was worse.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// System voice used to speak replies aloud.
    pub voice: String,
    /// Where the conversation log lives.
    pub history_file: PathBuf,
    /// Past turns carried into each prompt.
    pub interaction_memory: usize,
    /// Oracle deadline in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            interaction_memory: DEFAULT_INTERACTION_MEMORY,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Load the config file at `path`, falling back to [`Config::default`]
    /// if it is missing or unusable. The fallback never touches the file.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::NotFound(_)) => {
                debug!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring config file: {e}; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.interaction_memory == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "interaction_memory must be at least 1".to_string(),
            });
        }
        if self.timeout == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// Write a fresh config file with the default settings at `path`.
    pub fn create_config(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        // Kept as a literal so the generated file carries a stable key order.
        let config_template = r#"{
  "voice": "com.apple.voice.compact.en-US.Samantha",
  "history_file": "conversation_history.json",
  "interaction_memory": 10,
  "timeout": 30
}"#;

        std::fs::write(path, config_template).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Install Ollama and pull a model: 'ollama pull llama3.2'");
        println!("   2. Adjust the voice to one your system's speech command offers");
        println!("   3. Run 'natter chat' to start talking");
        println!();
        println!("🔧 Configuration options:");
        println!("   - voice: System voice used to speak replies aloud");
        println!("   - history_file: Where the conversation log is written");
        println!("   - interaction_memory: Past turns carried into each prompt");
        println!("   - timeout: Seconds to wait for the model before giving up");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(matches!(Config::load(&path), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_or_default_on_missing_file_is_stable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let first = Config::load_or_default(&path);
        let second = Config::load_or_default(&path);

        assert_eq!(first, Config::default());
        assert_eq!(first, second);
        assert!(!path.exists());
    }

    #[test]
    fn malformed_json_reports_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Malformed { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn partial_config_is_rejected_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"voice": "novelty"}"#).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Malformed { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn zero_interaction_memory_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = r#"{
  "voice": "v",
  "history_file": "h.json",
  "interaction_memory": 0,
  "timeout": 30
}"#;
        std::fs::write(&path, config).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Invalid { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = r#"{
  "voice": "v",
  "history_file": "h.json",
  "interaction_memory": 10,
  "timeout": 0
}"#;
        std::fs::write(&path, config).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Invalid { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn complete_config_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = r#"{
  "voice": "com.apple.voice.compact.en-GB.Daniel",
  "history_file": "elsewhere.json",
  "interaction_memory": 4,
  "timeout": 5
}"#;
        std::fs::write(&path, config).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.voice, "com.apple.voice.compact.en-GB.Daniel");
        assert_eq!(loaded.history_file, PathBuf::from("elsewhere.json"));
        assert_eq!(loaded.interaction_memory, 4);
        assert_eq!(loaded.timeout, 5);
    }

    #[test]
    fn created_template_matches_the_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::create_config(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn create_config_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::create_config(&path).unwrap();

        assert!(matches!(
            Config::create_config(&path),
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
