//! Turn loop driving a human seat and the bot
//!
//! Each turn asks the side to move for a cell, places it through
//! [`Game::play`] (which rejects occupied or out-of-range cells), re-evaluates
//! the board and stops as soon as the outcome is terminal.

pub mod observers;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    config::GameConfig,
    ports::{Agent, Observer},
    tictactoe::{Game, Outcome, Side},
};

pub use observers::{BoardPrinter, ProgressObserver};

/// Tally of finished games from the bot's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl SessionResult {
    /// Count one finished game
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::BotWins => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::HumanWins => self.losses += 1,
            Outcome::InProgress => return,
        }
        self.total_games += 1;
    }

    pub fn loss_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.losses as f64 / self.total_games as f64
        }
    }
}

/// A sequence of games between two agents
pub struct Session {
    first: Side,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Create a session where `first` opens every game
    pub fn new(first: Side) -> Self {
        Self {
            first,
            observers: Vec::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.first)
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `games` games and return the bot's record
    pub fn run(
        &mut self,
        games: usize,
        human: &mut dyn Agent,
        bot: &mut dyn Agent,
    ) -> Result<SessionResult> {
        for observer in &mut self.observers {
            observer.on_session_start(games)?;
        }

        let mut result = SessionResult::default();
        for game_num in 0..games {
            let game = self.play_game(game_num, human, bot)?;
            result.record(game.outcome());
        }

        for observer in &mut self.observers {
            observer.on_session_end()?;
        }

        info!(
            games = result.total_games,
            wins = result.wins,
            draws = result.draws,
            losses = result.losses,
            "session finished"
        );
        Ok(result)
    }

    /// Play a single game to completion
    pub fn play_game(
        &mut self,
        game_num: usize,
        human: &mut dyn Agent,
        bot: &mut dyn Agent,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num, self.first)?;
        }

        let mut game = Game::new(self.first);
        while !game.is_over() {
            let side = game.to_move();
            let agent: &mut dyn Agent = match side {
                Side::Human => &mut *human,
                Side::Bot => &mut *bot,
            };

            let position = agent.select_move(game.board(), side)?;
            game.play(position, side)?;
            debug!(game_num, %side, agent = agent.name(), position, "move played");

            if let Some(mv) = game.moves().last() {
                for observer in &mut self.observers {
                    observer.on_move(game_num, mv, game.board())?;
                }
            }
        }

        info!(game_num, outcome = %game.outcome(), moves = game.moves().len(), "game over");
        for observer in &mut self.observers {
            observer.on_game_end(game_num, &game)?;
        }

        Ok(game)
    }
}
