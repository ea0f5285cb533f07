//! The eight winning lines and queries over them

use super::{Cell, Side, board::CELL_COUNT};

/// A fixed triple of cell indices
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board, scanned in this order
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Line-ownership queries over raw cells
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a side owns all three cells of any line
    pub fn has_won(cells: &[Cell; CELL_COUNT], side: Side) -> bool {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First complete line in scan order and the side owning it.
    ///
    /// Within a line the human is checked before the bot; a line cannot be
    /// owned by both.
    pub fn completed_line(cells: &[Cell; CELL_COUNT]) -> Option<(Line, Side)> {
        WINNING_LINES.iter().find_map(|&line| {
            [Side::Human, Side::Bot]
                .into_iter()
                .find(|side| line.iter().all(|&idx| cells[idx] == side.to_cell()))
                .map(|side| (line, side))
        })
    }

    /// Positions that would immediately complete a line for `side`, ascending
    pub fn winning_moves(cells: &[Cell; CELL_COUNT], side: Side) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, side, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// The empty cell of `line` when `side` holds the other two
    fn winning_move_in_line(
        cells: &[Cell; CELL_COUNT],
        side: Side,
        line: &Line,
    ) -> Option<usize> {
        let owned = line.iter().filter(|&&idx| cells[idx] == side.to_cell()).count();
        let mut open = line.iter().copied().filter(|&idx| cells[idx] == Cell::Empty);
        match (owned, open.next(), open.next()) {
            (2, Some(idx), None) => Some(idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::Bot;
        cells[4] = Cell::Bot;
        cells[5] = Cell::Bot;

        assert!(LineAnalyzer::has_won(&cells, Side::Bot));
        assert!(!LineAnalyzer::has_won(&cells, Side::Human));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::Human;
        cells[5] = Cell::Human;
        cells[8] = Cell::Human;

        assert!(LineAnalyzer::has_won(&cells, Side::Human));
        assert!(!LineAnalyzer::has_won(&cells, Side::Bot));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::Bot;
        cells[4] = Cell::Bot;
        cells[6] = Cell::Bot;

        assert!(LineAnalyzer::has_won(&cells, Side::Bot));
        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([2, 4, 6], Side::Bot))
        );
    }

    #[test]
    fn test_completed_line_scan_order() {
        // O O O
        // O . .
        // O . .
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::Human;
        }
        // Row is reported before the column
        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([0, 1, 2], Side::Human))
        );
        assert_eq!(LineAnalyzer::completed_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // X X .
        // X . .
        // . . .
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Bot;
        cells[1] = Cell::Bot;
        cells[3] = Cell::Bot;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Side::Bot), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Side::Human).is_empty());
    }

    #[test]
    fn test_winning_moves_blocked_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Human;
        cells[1] = Cell::Human;
        cells[2] = Cell::Bot;

        assert!(LineAnalyzer::winning_moves(&cells, Side::Human).is_empty());
    }
}
