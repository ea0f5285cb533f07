//! Self-play command - batch games of the bot against an adversary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::load_config;
use crate::{
    agents::{MinimaxAgent, OpponentKind},
    session::{ProgressObserver, Session, SessionResult},
    tictactoe::Side,
};

#[derive(Parser, Debug)]
#[command(about = "Play the bot against a random or optimal adversary")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Adversary seated as the human (random, optimal)
    #[arg(long, short = 'o')]
    pub opponent: Option<OpponentKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the bot make the opening move
    #[arg(long)]
    pub bot_first: bool,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the result summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(games) = args.games {
        config = config.with_games(games);
    }
    if let Some(opponent) = args.opponent {
        config = config.with_opponent(opponent);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.bot_first {
        config = config.with_first(Side::Bot);
    }

    println!("=== Self-play Configuration ===");
    println!("Opponent: {:?}", config.opponent);
    println!("First move: {}", config.first);
    println!("Games: {}", config.games);
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }
    println!();

    let mut opponent = config.opponent.build(config.seed);
    let mut bot = MinimaxAgent::new("Bot".to_string());
    let mut session =
        Session::from_config(&config).with_observer(Box::new(ProgressObserver::new()));
    let result = session.run(config.games, opponent.as_mut(), &mut bot)?;

    print_summary(&result);

    if let Some(path) = args.export {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &result)?;
        println!("Summary written to {}", path.display());
    }

    if result.losses > 0 {
        anyhow::bail!("bot lost {} of {} games", result.losses, result.total_games);
    }
    Ok(())
}

fn print_summary(result: &SessionResult) {
    println!("\n=== Bot Results ===");
    println!("Wins:   {}", result.wins);
    println!("Draws:  {}", result.draws);
    println!("Losses: {}", result.losses);
    println!("Loss rate: {:.1}%", result.loss_rate() * 100.0);
}
