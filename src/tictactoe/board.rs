//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Bot,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'O',
            Cell::Bot => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'O' | 'o' => Some(Cell::Human),
            'X' | 'x' => Some(Cell::Bot),
            _ => None,
        }
    }

    /// The side owning this cell, if any
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Human => Some(Side::Human),
            Cell::Bot => Some(Side::Bot),
            Cell::Empty => None,
        }
    }
}

/// One of the two sides in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }

    /// Convert side to the cell it marks
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Bot => Cell::Bot,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Bot => write!(f, "bot"),
        }
    }
}

/// Nine cells in row-major order (0,1,2 / 3,4,5 / 6,7,8)
///
/// `Board` is `Copy`; every transform returns a new value and leaves the
/// receiver untouched, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells, unchecked.
    ///
    /// Any assignment is accepted, including ones no game can reach (both
    /// sides owning a line, mark counts more than one apart). Use
    /// [`Board::from_string`] or [`Board::from_marks`] for validated input.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Build a board by placing human and bot marks at the given positions.
    ///
    /// # Errors
    ///
    /// Returns error if a position is out of range or listed twice.
    pub fn from_marks(human: &[usize], bot: &[usize]) -> Result<Self, crate::Error> {
        let mut board = Board::new();
        for &pos in human {
            board = board.place(pos, Side::Human)?;
        }
        for &pos in bot {
            board = board.place(pos, Side::Bot)?;
        }
        Ok(board)
    }

    /// Parse a board from its text form.
    ///
    /// Nine cell characters are expected; whitespace and `|` separators are
    /// skipped. `O` marks the human, `X` the bot, and `.`, `_` or the cell's
    /// own 1-based label (as printed by [`Display`](fmt::Display)) is empty.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - There are not exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - Both sides own a complete line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = match c.to_digit(10) {
                Some(label) if label as usize == i + 1 => Cell::Empty,
                _ => Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?,
            };
        }

        if LineAnalyzer::has_won(&cells, Side::Human) && LineAnalyzer::has_won(&cells, Side::Bot) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("both sides own a complete line in '{s}'"),
            });
        }

        Ok(Board { cells })
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is empty. Out-of-range positions never are.
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions marked by `side`, ascending
    pub fn positions(&self, side: Side) -> Vec<usize> {
        let target = side.to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == target)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `side`'s mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`](crate::Error::InvalidPosition) for
    /// positions outside 0-8 and [`Error::InvalidMove`](crate::Error::InvalidMove)
    /// if the cell is already marked.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, side: Side) -> Result<Board, crate::Error> {
        if pos >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = side.to_cell();
        Ok(next)
    }

    /// Copy of the board with `side` marked at `pos`, for callers that took
    /// `pos` from [`Board::empty_cells`].
    pub(crate) fn with_mark(&self, pos: usize, side: Side) -> Board {
        debug_assert!(self.is_empty(pos), "cell {pos} is not empty");
        let mut next = *self;
        next.cells[pos] = side.to_cell();
        next
    }

    /// Swap human and bot marks.
    ///
    /// Lets the bot-perspective search answer "what is best for the human"
    /// by evaluating the mirrored board.
    #[must_use = "swap_sides returns a new board; the original is unchanged"]
    pub fn swap_sides(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::Human => Cell::Bot,
                Cell::Bot => Cell::Human,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Compact single-line encoding, e.g. `OO..X....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the three rows joined by `|`, empty cells showing their 1-based
/// label:
///
/// ```text
/// O|O|3
/// 4|X|6
/// 7|8|9
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            match cell {
                Cell::Empty => write!(f, "{}", i + 1)?,
                marked => write!(f, "{}", marked.to_char())?,
            }
            if (i + 1) % 3 == 0 {
                if i < CELL_COUNT - 1 {
                    writeln!(f)?;
                }
            } else {
                write!(f, "|")?;
            }
        }
        Ok(())
    }
}
