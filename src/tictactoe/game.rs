//! High-level game management

use serde::{Deserialize, Serialize};

use super::{Board, Outcome, Side};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub side: Side,
}

/// A game in progress: the board, whose turn it is, and the move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first: Side,
    to_move: Side,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with `first` to move on an empty board
    pub fn new(first: Side) -> Self {
        Game {
            board: Board::new(),
            first,
            to_move: first,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first(&self) -> Side {
        self.first
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Play a move for `side` and return the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over, it is not `side`'s turn, or
    /// the position is out of range or occupied. The game is unchanged on error.
    pub fn play(&mut self, position: usize, side: Side) -> Result<Outcome, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if side != self.to_move {
            return Err(crate::Error::NotYourTurn {
                expected: self.to_move,
                got: side,
            });
        }

        self.board = self.board.place(position, side)?;
        self.moves.push(Move { position, side });
        self.to_move = side.opponent();
        Ok(self.outcome())
    }

    /// Replay the history and return every board from the empty one onwards
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        boards.push(board);
        for m in &self.moves {
            board = board.place(m.position, m.side)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Side::Human)
    }
}
