//! Starting position and turn order.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves whenever the mark counts are tied, O when X is one ahead. Boards
/// cannot be built with any other balance, so there is no failure case.
#[instrument(level = "trace", skip(board))]
pub fn player_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
