//! Contestant trait and implementations.

mod engine;
mod human;

pub use engine::EngineContestant;
pub use human::HumanContestant;

use anyhow::Result;
use optimal_tictactoe::{Board, InvalidMoveError, Move};

/// A source of moves for one side of the board.
pub trait Contestant {
    /// Chooses the next move for the player to move on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Called when the engine rejected the last chosen move.
    ///
    /// Returning `Ok` asks for another move; the default treats a rejected
    /// move as fatal.
    fn reject(&mut self, err: &InvalidMoveError) -> Result<()> {
        Err(anyhow::anyhow!("{} chose an invalid move: {}", self.name(), err))
    }

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
