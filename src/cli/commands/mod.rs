//! Subcommands of the `noughts` binary

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::GameConfig;

pub mod analyze;
pub mod play;
pub mod self_play;

/// Load the config file when one is given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}
