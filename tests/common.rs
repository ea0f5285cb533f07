//! Common test utilities for the noughts test suite.
//!
//! Board enumerators and test doubles shared by the integration tests.

#![allow(dead_code)]

use std::{
    collections::HashSet,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use noughts::{
    Result,
    ports::Agent,
    tictactoe::{Board, CELL_COUNT, Cell, Side},
};

/// Every assignment of {Empty, Human, Bot} to the nine cells (3^9 boards),
/// including ones no game can reach.
pub fn all_boards() -> Vec<Board> {
    let states = [Cell::Empty, Cell::Human, Cell::Bot];
    (0..3usize.pow(CELL_COUNT as u32))
        .map(|mut code| {
            let mut cells = [Cell::Empty; CELL_COUNT];
            for cell in &mut cells {
                *cell = states[code % 3];
                code /= 3;
            }
            Board::from_cells(cells)
        })
        .collect()
}

/// Boards reachable by alternating play from the empty board with `first`
/// opening, paired with the side to move. Play stops at terminal boards.
pub fn reachable_boards(first: Side) -> Vec<(Board, Side)> {
    fn visit(
        board: Board,
        to_move: Side,
        seen: &mut HashSet<Board>,
        out: &mut Vec<(Board, Side)>,
    ) {
        if !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        if board.is_game_over() {
            return;
        }
        for pos in board.empty_cells() {
            let next = board.place(pos, to_move).unwrap();
            visit(next, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(Board::new(), first, &mut seen, &mut out);
    out
}

/// Agent replaying a fixed list of cells
pub struct ScriptedAgent {
    name: String,
    moves: Vec<usize>,
    next: usize,
}

impl ScriptedAgent {
    pub fn new(moves: Vec<usize>) -> Self {
        Self {
            name: "Scripted".to_string(),
            moves,
            next: 0,
        }
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, _board: &Board, _side: Side) -> Result<usize> {
        let mv = self
            .moves
            .get(self.next)
            .copied()
            .ok_or(noughts::Error::NoValidMoves)?;
        self.next += 1;
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Writer whose contents stay readable after it has been boxed away
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
