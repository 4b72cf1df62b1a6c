//! Terminal runner for the optimal tic-tac-toe engine.
//!
//! The runner holds no rules of its own. It renders boards, reads moves from
//! a human, and asks [`optimal_tictactoe`] for everything else.
//!
//! # Architecture
//!
//! - **Cli**: command-line parsing
//! - **Config**: optional TOML settings for `play`
//! - **Contestants**: sources of moves (keyboard or engine)
//! - **Session**: the turn loop that drives two contestants to the end
//! - **Analysis**: one-shot report on a given board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod contestants;
pub mod session;

pub use analysis::analyze;
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use contestants::{Contestant, EngineContestant, HumanContestant};
pub use session::{MatchReport, play_match};
