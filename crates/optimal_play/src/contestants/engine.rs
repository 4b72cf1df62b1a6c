//! Engine contestant backed by exhaustive minimax.

use super::Contestant;
use anyhow::Result;
use optimal_tictactoe::{Board, Move, minimax};
use tracing::debug;

/// Plays the move returned by [`minimax`].
pub struct EngineContestant {
    name: String,
}

impl EngineContestant {
    /// Creates a new engine contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for EngineContestant {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let mv = minimax(board)
            .ok_or_else(|| anyhow::anyhow!("No moves left for {}", self.name))?;
        debug!(engine = %self.name, %mv, "Engine chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
