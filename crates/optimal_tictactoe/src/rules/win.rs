//! Win detection logic for tic-tac-toe.

use crate::action::Move;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the owner of a completed line, if any.
fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let sq = board.at(a)?;
    if sq == board.at(b)? && sq == board.at(c)? {
        sq.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` after all eight lines have been scanned without one.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Checks whether `player` holds any complete line.
pub(crate) fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(player))
}

/// Squares of the first completed line, for highlighting a finished game.
pub fn winning_line(board: &Board) -> Option<[Move; 3]> {
    LINES
        .into_iter()
        .find(|&line| line_owner(board, line).is_some())
}

/// True when the square at `mv` is empty and would complete a line for
/// `player`.
pub fn completes_line(board: &Board, mv: Move, player: Player) -> bool {
    if board.at(mv) != Some(Square::Empty) {
        return false;
    }
    let marked = board.with_square(mv, Square::Occupied(player));
    LINES
        .into_iter()
        .filter(|line| line.contains(&mv))
        .any(|line| line_owner(&marked, line) == Some(player))
}
