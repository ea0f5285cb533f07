//! noughts - tic-tac-toe against an unbeatable minimax bot
//!
//! - `play`: interactive game on the terminal
//! - `analyze`: minimax scores for every move of a position
//! - `self-play`: batch games against random or optimal adversaries

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against an unbeatable bot", long_about = None)]
struct Cli {
    /// Log search and turn details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the bot
    Play(noughts::cli::commands::play::PlayArgs),

    /// Score every move of a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Play the bot against an adversary many times
    SelfPlay(noughts::cli::commands::self_play::SelfPlayArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::SelfPlay(args) => noughts::cli::commands::self_play::execute(args),
    }
}
