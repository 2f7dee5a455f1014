use natter_config::Config;
use std::path::PathBuf;

/// Strategy for initializing the configuration.
///
/// Writes the default config file and prints where it landed, refusing to
/// overwrite an existing one.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = PathBuf;

    async fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        Config::create_config(&config_path)?;
        Ok(())
    }
}
