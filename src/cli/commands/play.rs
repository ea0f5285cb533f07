//! Play command - interactive game against the bot

use std::{
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use super::load_config;
use crate::{
    agents::MinimaxAgent,
    cli::console::ConsoleAgent,
    session::{BoardPrinter, Session},
    tictactoe::Side,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the unbeatable bot")]
pub struct PlayArgs {
    /// Let the bot make the opening move
    #[arg(long)]
    pub bot_first: bool,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.bot_first {
        config = config.with_first(Side::Bot);
    }

    let mut human = ConsoleAgent::new(
        "You".to_string(),
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    let mut bot = MinimaxAgent::new("Bot".to_string());
    let mut session =
        Session::from_config(&config).with_observer(Box::new(BoardPrinter::new(io::stdout())));

    match session.play_game(0, &mut human, &mut bot) {
        Ok(_) => Ok(()),
        Err(crate::Error::InputClosed) => {
            println!("\nInput closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}
