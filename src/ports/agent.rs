//! Agent port - abstraction over whatever picks a cell for one side
//!
//! The turn loop never knows whether a move comes from the minimax engine,
//! a person at a terminal or a scripted test double.

use crate::{
    Result,
    tictactoe::{Board, Side},
};

/// Agent trait - unified interface for every move source
///
/// # Examples
///
/// ```
/// use noughts::{
///     Result,
///     ports::Agent,
///     tictactoe::{Board, Side},
/// };
///
/// struct FirstEmpty;
///
/// impl Agent for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _side: Side) -> Result<usize> {
///         board
///             .empty_cells()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mut agent = FirstEmpty;
/// assert_eq!(agent.select_move(&Board::new(), Side::Human).unwrap(), 0);
/// ```
pub trait Agent: Send {
    /// Select a cell (0-8) for `side` to mark on `board`.
    ///
    /// The turn loop validates the answer with [`Board::place`], so an agent
    /// returning an occupied cell surfaces as an error rather than a silent
    /// overwrite.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (terminal board, closed
    /// input).
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize>;

    /// Get the agent's name.
    ///
    /// Used in logs and summaries.
    fn name(&self) -> &str;
}
