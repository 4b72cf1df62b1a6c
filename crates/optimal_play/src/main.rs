//! Optimal Play - unified CLI
//!
//! Human vs engine, engine vs engine, and single-board analysis.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use optimal_play::{
    Cli, Command, EngineContestant, HumanContestant, PlayConfig, analyze, play_match,
};
use optimal_tictactoe::{Board, Player};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            hints,
            config,
        } => run_play(human, hints, config),
        Command::SelfPlay => run_self_play(),
        Command::Best { board } => run_best(&board),
    }
}

/// Run a human vs engine game on stdin/stdout
#[instrument]
fn run_play(human: Option<Player>, hints: bool, config: Option<PathBuf>) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(human, hints);
    info!(human = %config.human(), hints = config.hints(), "Starting play session");

    let stdin = std::io::stdin();
    let mut person =
        HumanContestant::new("You", stdin.lock(), std::io::stdout()).with_hints(*config.hints());
    let mut engine = EngineContestant::new(config.engine_name().clone());
    let mut out = std::io::stdout();

    let report = match config.human() {
        Player::X => play_match(&mut person, &mut engine, &mut out)?,
        Player::O => play_match(&mut engine, &mut person, &mut out)?,
    };
    info!(outcome = %report.outcome, "Play session finished");
    Ok(())
}

/// Run an engine vs engine game
#[instrument]
fn run_self_play() -> Result<()> {
    let mut x = EngineContestant::new("minimax X");
    let mut o = EngineContestant::new("minimax O");
    let report = play_match(&mut x, &mut o, &mut std::io::stdout())?;
    info!(outcome = %report.outcome, plies = report.moves.len(), "Self-play finished");
    Ok(())
}

/// Print the analysis of one board
#[instrument]
fn run_best(board: &str) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Cannot read board {:?}", board))?;
    analyze(&board, &mut std::io::stdout())
}
