//! Observer port - abstraction for watching the turn loop
//!
//! Rendering, progress bars and statistics hang off these callbacks so the
//! loop itself only sequences moves.

use crate::{
    Result,
    tictactoe::{Board, Game, Move, Side},
};

/// Observer trait for monitoring a session
///
/// # Event Sequence
///
/// 1. `on_session_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num, first)`
///    - `on_move(...)` - After each accepted move
///    - `on_game_end(game_num, game)`
/// 3. `on_session_end()` - Once at the end
///
/// Every method defaults to a no-op.
pub trait Observer: Send {
    fn on_session_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called before the first move of a game.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the game (0-based)
    /// * `first` - Side making the opening move
    fn on_game_start(&mut self, _game_num: usize, _first: Side) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been placed.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `mv` - The move just played
    /// * `board` - Board after the move
    fn on_move(&mut self, _game_num: usize, _mv: &Move, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called once the game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        Ok(())
    }
}

