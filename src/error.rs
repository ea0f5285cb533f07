//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Side;

/// Everything that can go wrong while setting up or playing a game
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {position} is already marked")]
    InvalidMove { position: usize },

    #[error("cell {position} is off the board (cells are 0-8)")]
    InvalidPosition { position: usize },

    #[error("the game has already finished")]
    GameOver,

    #[error("no empty cell left to play")]
    NoValidMoves,

    #[error("{got} tried to move, but it is {expected}'s turn")]
    NotYourTurn { expected: Side, got: Side },

    #[error("expected {expected} cells in board '{context}', found {got}")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("'{character}' is not a cell mark (cell {position} of '{context}')")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("bad configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("cannot build progress bar: {message}")]
    ProgressBarTemplate { message: String },

    #[error("input ended before a move was entered")]
    InputClosed,

    #[error("could not {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation that produced it
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io("perform I/O", source)
    }
}
