//! Analyze command - score every move of a given position

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    search::{self, Minimax, SearchResult},
    tictactoe::{Board, LineAnalyzer, Outcome, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax score of every move in a position")]
pub struct AnalyzeArgs {
    /// Board in text form, e.g. "OO..X...." (O = human, X = bot, . = empty)
    pub board: String,

    /// Analyze for the human to move instead of the bot
    #[arg(long)]
    pub human_to_move: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct MoveScore {
    pub cell: usize,
    pub score: i32,
}

/// Everything `analyze` reports about a position
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub outcome: Outcome,
    pub to_move: Side,
    pub immediate_wins: Vec<usize>,
    pub threats_to_block: Vec<usize>,
    pub scores: Vec<MoveScore>,
    pub best: Option<SearchResult>,
    pub nodes: u64,
}

/// Build the report; scores are from the perspective of `to_move`.
pub fn analyze_position(board: &Board, to_move: Side) -> crate::Result<AnalysisReport> {
    let outcome = board.evaluate();
    let mut report = AnalysisReport {
        board: board.encode(),
        outcome,
        to_move,
        immediate_wins: LineAnalyzer::winning_moves(board.cells(), to_move),
        threats_to_block: LineAnalyzer::winning_moves(board.cells(), to_move.opponent()),
        scores: Vec::new(),
        best: None,
        nodes: 0,
    };
    if outcome.is_terminal() {
        return Ok(report);
    }

    let view = match to_move {
        Side::Bot => *board,
        Side::Human => board.swap_sides(),
    };
    let mut searcher = Minimax::new();
    let scores = searcher.evaluate_moves(&view)?;
    report.best = search::first_best(&scores);
    report.nodes = searcher.nodes();
    report.scores = scores
        .into_iter()
        .map(|(cell, score)| MoveScore { cell, score })
        .collect();
    Ok(report)
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let to_move = if args.human_to_move {
        Side::Human
    } else {
        Side::Bot
    };
    let report = analyze_position(&board, to_move)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}\n");
    println!("Outcome: {}", report.outcome);
    if report.outcome.is_terminal() {
        return Ok(());
    }

    println!("To move: {}", report.to_move);
    if !report.immediate_wins.is_empty() {
        println!("Immediate wins: {}", labels(&report.immediate_wins));
    }
    if !report.threats_to_block.is_empty() {
        println!("Threats to block: {}", labels(&report.threats_to_block));
    }

    println!("\n=== Move scores ({} perspective) ===", report.to_move);
    for MoveScore { cell, score } in &report.scores {
        println!("  cell {} -> {score:+}", cell + 1);
    }
    if let Some(best) = report.best {
        println!(
            "\nBest move: cell {} (score {:+}, {} nodes searched)",
            best.cell + 1,
            best.score,
            report.nodes
        );
    }
    Ok(())
}

fn labels(cells: &[usize]) -> String {
    cells
        .iter()
        .map(|c| (c + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_block_position() {
        let board = Board::from_marks(&[0, 1], &[4]).unwrap();
        let report = analyze_position(&board, Side::Bot).unwrap();
        assert_eq!(report.threats_to_block, vec![2]);
        assert!(report.immediate_wins.is_empty());
        assert_eq!(report.scores.len(), 6);
        assert_eq!(report.best, Some(SearchResult { cell: 2, score: 0 }));
    }

    #[test]
    fn test_report_counts_one_search_pass() {
        let board = Board::from_marks(&[0, 1], &[4]).unwrap();
        let report = analyze_position(&board, Side::Bot).unwrap();

        let mut searcher = Minimax::new();
        let best = searcher.search(&board).unwrap();
        assert_eq!(report.best, Some(best));
        assert_eq!(report.nodes, searcher.nodes());
    }

    #[test]
    fn test_report_for_finished_game() {
        let board = Board::from_marks(&[0, 1, 2], &[4, 5]).unwrap();
        let report = analyze_position(&board, Side::Bot).unwrap();
        assert_eq!(report.outcome, Outcome::HumanWins);
        assert!(report.scores.is_empty());
        assert_eq!(report.best, None);
    }

    #[test]
    fn test_human_perspective() {
        // Bot threatens the top row; the human must block.
        let board = Board::from_marks(&[4], &[0, 1]).unwrap();
        let report = analyze_position(&board, Side::Human).unwrap();
        assert_eq!(report.best.map(|b| b.cell), Some(2));
    }
}
