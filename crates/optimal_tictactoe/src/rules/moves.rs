//! Legal-move enumeration and move application.

use super::turn::player_to_move;
use super::win::winner;
use crate::action::Move;
use crate::error::{InvalidMoveError, InvalidMoveKind};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::types::{Board, SIZE, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns every empty square as a move.
///
/// The set iterates in row-major order. A full board yields an empty set.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    (0..SIZE * SIZE)
        .filter_map(Move::from_index)
        .filter(|&mv| board.at(mv) == Some(Square::Empty))
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is left as it was; the result is an independent copy.
///
/// # Errors
///
/// Returns [`InvalidMoveError`] when `mv` is off the board, when the square
/// is already occupied, or when a player has already won.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    let (row, col) = (mv.row(), mv.col());

    match board.at(mv) {
        None => return Err(InvalidMoveError::new(InvalidMoveKind::OutOfRange { row, col })),
        Some(Square::Occupied(_)) => {
            return Err(InvalidMoveError::new(InvalidMoveKind::Occupied { row, col }));
        }
        Some(Square::Empty) => {}
    }

    if winner(board).is_some() {
        return Err(InvalidMoveError::new(InvalidMoveKind::GameOver));
    }

    let next = board.with_square(mv, Square::Occupied(player_to_move(board)));
    debug_assert!(
        BoardInvariants::check_all(&next).is_ok(),
        "apply_move broke a board invariant"
    );
    Ok(next)
}
