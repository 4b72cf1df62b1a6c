//! Terminal detection, utility and outcome.

use super::draw::is_full;
use super::win::winner;
use crate::outcome::Outcome;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks whether the game is over: somebody won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's side: `1` X won, `-1` O won, `0`
/// otherwise.
///
/// Only meaningful on terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::from(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::NoWinnerYet,
    }
}
