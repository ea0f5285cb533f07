//! Tic-tac-toe against an unbeatable minimax opponent
//!
//! This crate provides:
//! - A 9-cell board model with terminal-state evaluation
//! - Exhaustive minimax search choosing the bot's move
//! - A turn loop over pluggable agents and observers
//! - The `noughts` command-line front end
//!
//! ```
//! use noughts::{search, tictactoe::Board};
//!
//! // Human holds the top-left two cells, bot the centre: the bot must block.
//! let board = Board::from_marks(&[0, 1], &[4]).unwrap();
//! assert_eq!(search::best_move(&board).unwrap(), 2);
//! ```

pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchResult, best_move, minimax};
pub use tictactoe::{Board, Cell, Outcome, Side};
