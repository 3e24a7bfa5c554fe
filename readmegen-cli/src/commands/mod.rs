pub mod catalog;
pub mod diff;
pub mod generate;
pub mod init;

use anyhow::{Context, Result};

use readmegen_core::{config, Config};

/// Load `~/.readmegen/config.yaml` (defaults when absent).
pub(crate) fn load_config() -> Result<Config> {
    config::load_config().context("failed to load ~/.readmegen/config.yaml")
}
