//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;

pub use board::{Board, CELL_COUNT, Cell, Side};
pub use game::{Game, Move};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
pub use outcome::Outcome;
