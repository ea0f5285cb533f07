//! Session observers
//!
//! - [`BoardPrinter`] renders the board after every move, as the interactive
//!   game shows it
//! - [`ProgressObserver`] drives a progress bar over batch play

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};

use super::SessionResult;
use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, Game, Move, Side},
};

/// Writes the board and turn banners to any writer
pub struct BoardPrinter<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_board(&mut self, banner: Option<&str>, board: &Board) -> Result<()> {
        let written = match banner {
            Some(banner) => writeln!(self.out, "{banner}\n{board}\n"),
            None => writeln!(self.out, "{board}\n"),
        };
        written
            .and_then(|_| self.out.flush())
            .map_err(|e| crate::Error::io("write board", e))
    }
}

impl<W: Write + Send> Observer for BoardPrinter<W> {
    fn on_game_start(&mut self, _game_num: usize, _first: Side) -> Result<()> {
        self.write_board(None, &Board::new())
    }

    fn on_move(&mut self, _game_num: usize, mv: &Move, board: &Board) -> Result<()> {
        let banner = match mv.side {
            Side::Human => "Your Move:",
            Side::Bot => "Bot's move:",
        };
        self.write_board(Some(banner), board)
    }

    fn on_game_end(&mut self, _game_num: usize, game: &Game) -> Result<()> {
        writeln!(self.out, "Game Over! Result: {}", game.outcome())
            .and_then(|_| self.out.flush())
            .map_err(|e| crate::Error::io("write result", e))
    }
}

/// Progress bar observer - shows batch progress with a running W/D/L tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: SessionResult,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: SessionResult::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "W:{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_session_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        self.tally.record(game.outcome());
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
