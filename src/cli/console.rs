//! Console human player
//!
//! Reads 1-based cell labels from a line-oriented input and re-prompts until
//! it gets one naming an empty cell, so malformed text never reaches the
//! board.

use std::io::{BufRead, Write};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, CELL_COUNT, Side},
};

pub const PROMPT: &str = "Enter a position (1-9)";
pub const INVALID_INPUT: &str = "Invalid Input";

/// Parse a 1-based label into an empty cell index
pub fn parse_position(input: &str, board: &Board) -> Option<usize> {
    let label: usize = input.trim().parse().ok()?;
    if !(1..=CELL_COUNT).contains(&label) {
        return None;
    }
    let pos = label - 1;
    board.is_empty(pos).then_some(pos)
}

/// Human seat backed by a reader and a writer
pub struct ConsoleAgent<R: BufRead + Send, W: Write + Send> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> ConsoleAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// Recover the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")
            .and_then(|_| self.output.flush())
            .map_err(|e| crate::Error::io("write prompt", e))
    }
}

impl<R: BufRead + Send, W: Write + Send> Agent for ConsoleAgent<R, W> {
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<usize> {
        if board.is_game_over() {
            return Err(crate::Error::GameOver);
        }

        loop {
            self.say(PROMPT)?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| crate::Error::io("read move", e))?;
            if read == 0 {
                return Err(crate::Error::InputClosed);
            }

            match parse_position(&line, board) {
                Some(pos) => return Ok(pos),
                None => self.say(INVALID_INPUT)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
