//! Game configuration
//!
//! Loaded from an optional JSON file; missing fields take their defaults and
//! command-line flags override whatever the file says.
//!
//! ```
//! use noughts::{agents::OpponentKind, config::GameConfig, tictactoe::Side};
//!
//! let config = GameConfig::default()
//!     .with_first(Side::Bot)
//!     .with_opponent(OpponentKind::Optimal)
//!     .with_seed(7);
//! assert_eq!(config.first, Side::Bot);
//! ```

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, agents::OpponentKind, tictactoe::Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side making the opening move
    pub first: Side,

    /// Number of games for batch self-play
    pub games: usize,

    /// Adversary the bot faces in batch self-play
    pub opponent: OpponentKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: Side::Human,
            games: 100,
            opponent: OpponentKind::Random,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| crate::Error::io(format!("open config {}", path.display()), e))?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| crate::Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
