//! Exhaustive minimax search for the bot's move
//!
//! Scores are from the bot's perspective: a terminal bot win is worth
//! `+utility`, a human win `-utility` and a draw `0`, where utility is one
//! plus the number of cells still empty (see [`Board::utility`]). Every
//! continuation is explored; there is no pruning and no transposition table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    tictactoe::{Board, Outcome, Side},
};

/// The bot's chosen cell and its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub cell: usize,
    pub score: i32,
}

/// Score of a terminal board, or `None` while the game is in progress
pub fn terminal_score(board: &Board) -> Option<i32> {
    match board.evaluate() {
        Outcome::BotWins => Some(board.utility()),
        Outcome::HumanWins => Some(-board.utility()),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Depth-first minimax searcher.
///
/// Holds nothing but a visited-node counter; each recursive call works on its
/// own copy of the board.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards visited since construction
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` with the given side to move.
    ///
    /// The bot maximises, the human is modelled as an optimal adversary that
    /// minimises.
    pub fn minimax(&mut self, board: &Board, bot_to_move: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = terminal_score(board) {
            return score;
        }

        let side = if bot_to_move { Side::Bot } else { Side::Human };
        let mut best = if bot_to_move { i32::MIN } else { i32::MAX };

        // Not terminal, so at least one cell is empty and `best` gets replaced.
        for pos in board.empty_cells() {
            let value = self.minimax(&board.with_mark(pos, side), !bot_to_move);
            best = if bot_to_move {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Score every empty cell as a bot move, in ascending cell order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) on a full
    /// board and [`Error::GameOver`](crate::Error::GameOver) on any other
    /// terminal board.
    pub fn evaluate_moves(&mut self, board: &Board) -> Result<Vec<(usize, i32)>> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        if board.is_game_over() {
            return Err(crate::Error::GameOver);
        }

        let mut moves_with_values = Vec::with_capacity(empty.len());
        for pos in empty {
            let next = board.place(pos, Side::Bot)?;
            moves_with_values.push((pos, self.minimax(&next, false)));
        }
        Ok(moves_with_values)
    }

    /// Pick the bot's move: the first cell reaching the strict maximum.
    pub fn search(&mut self, board: &Board) -> Result<SearchResult> {
        let scores = self.evaluate_moves(board)?;
        let result = first_best(&scores).ok_or(crate::Error::NoValidMoves)?;
        debug!(
            board = %board.encode(),
            cell = result.cell,
            score = result.score,
            nodes = self.nodes,
            "search finished"
        );
        Ok(result)
    }
}

/// First `(cell, score)` pair holding the strict maximum score
pub fn first_best(scores: &[(usize, i32)]) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;
    for &(cell, score) in scores {
        if best.is_none_or(|b| score > b.score) {
            best = Some(SearchResult { cell, score });
        }
    }
    best
}

/// Minimax value of `board` with the given side to move
pub fn minimax(board: &Board, bot_to_move: bool) -> i32 {
    Minimax::new().minimax(board, bot_to_move)
}

/// Minimax value of every empty cell as a bot move
pub fn evaluate_moves(board: &Board) -> Result<Vec<(usize, i32)>> {
    Minimax::new().evaluate_moves(board)
}

/// The bot's chosen cell and its score
pub fn search(board: &Board) -> Result<SearchResult> {
    Minimax::new().search(board)
}

/// The cell the bot plays on `board`
///
/// # Errors
///
/// Fails if the board is already terminal or has no empty cell.
pub fn best_move(board: &Board) -> Result<usize> {
    search(board).map(|r| r.cell)
}

/// Best cell for `side`: the human seat is searched on the mirrored board.
pub fn best_move_for(board: &Board, side: Side) -> Result<usize> {
    match side {
        Side::Bot => best_move(board),
        Side::Human => best_move(&board.swap_sides()),
    }
}
