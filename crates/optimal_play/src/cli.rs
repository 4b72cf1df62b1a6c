//! Command-line interface for optimal_play.

use clap::{Parser, Subcommand};
use optimal_tictactoe::Player;

/// Optimal Play - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "optimal_play")]
#[command(about = "Play tic-tac-toe against exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine at the keyboard
    Play {
        /// Mark the human plays (X moves first). Overrides the config file.
        #[arg(long)]
        human: Option<Player>,

        /// Show the optimal moves before each human turn
        #[arg(long)]
        hints: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Let the engine play both sides
    SelfPlay,

    /// Report the best move for a board such as "XO./.X./..O"
    Best {
        /// Nine squares in row-major order; X, O, and . for empty
        board: String,
    },
}
