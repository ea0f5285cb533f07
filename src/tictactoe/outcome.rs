//! Terminal-state evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Side, lines::LineAnalyzer};

/// Result of evaluating a board; recomputed on demand, never stored on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    HumanWins,
    BotWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning side, if the game was won
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::HumanWins => Some(Side::Human),
            Outcome::BotWins => Some(Side::Bot),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// The outcome in which `side` has won
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Human => Outcome::HumanWins,
            Side::Bot => Outcome::BotWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::HumanWins => "human wins",
            Outcome::BotWins => "bot wins",
            Outcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

impl Board {
    /// Classify the board.
    ///
    /// Lines are scanned rows, then columns, then diagonals. With no complete
    /// line a full board is a draw and anything else is still in progress.
    pub fn evaluate(&self) -> Outcome {
        if let Some((_, side)) = LineAnalyzer::completed_line(self.cells()) {
            return Outcome::win_for(side);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_game_over(&self) -> bool {
        self.evaluate().is_terminal()
    }

    /// Check if a side has completed a line
    pub fn has_won(&self, side: Side) -> bool {
        LineAnalyzer::has_won(self.cells(), side)
    }

    /// One plus the number of empty cells.
    ///
    /// Applied to terminal boards by the search: a win reached with more
    /// cells still empty is worth more, so the bot takes the quickest win.
    /// A forced loss is steered towards the terminal board with the most
    /// empty cells, which is a consequence of this scoring rather than an
    /// explicit depth discount.
    pub fn utility(&self) -> i32 {
        1 + self.empty_cells().len() as i32
    }
}
