//! Built-in agents
//!
//! - [`MinimaxAgent`]: the unbeatable bot (or, seated as the human, an
//!   optimal adversary)
//! - [`RandomAgent`]: uniform random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    ports::Agent,
    search::Minimax,
    tictactoe::{Board, Side},
};

/// Exhaustive minimax player
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        // The search scores for the bot; the human seat searches the mirror.
        let view = match side {
            Side::Bot => *board,
            Side::Human => board.swap_sides(),
        };
        let mut searcher = Minimax::new();
        let result = searcher.search(&view)?;
        debug!(
            agent = %self.name,
            %side,
            cell = result.cell,
            score = result.score,
            nodes = searcher.nodes(),
            "minimax move"
        );
        Ok(result.cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<usize> {
        if board.is_game_over() {
            return Err(crate::Error::GameOver);
        }
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Which adversary the bot faces in batch play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Random,
    Optimal,
}

impl std::str::FromStr for OpponentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "optimal" => Ok(OpponentKind::Optimal),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown opponent '{other}' (expected: random, optimal)"),
            }),
        }
    }
}

impl OpponentKind {
    /// Build the adversary, seeding the random one when a seed is given
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            OpponentKind::Random => {
                let name = "Random".to_string();
                match seed {
                    Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                    None => Box::new(RandomAgent::new(name)),
                }
            }
            OpponentKind::Optimal => Box::new(MinimaxAgent::new("Optimal".to_string())),
        }
    }
}
