//! Exhaustive minimax search.
//!
//! X maximises [`utility`], O minimises it. The tree is searched to the end
//! of the game from every node with no pruning and no caching: at most nine
//! plies and well under a million nodes from the empty board.

use crate::action::Move;
use crate::rules::{apply_move, legal_moves, player_to_move, terminal, utility};
use crate::types::{Board, Player};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns an optimal move for the player to move, or `None` when the game
/// is already over.
///
/// When several moves are equally good the first one in row-major order is
/// returned; callers should only rely on it being optimal.
#[instrument(skip(board), fields(to_move = %player_to_move(board)))]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        debug!("Board is terminal, no move to search");
        return None;
    }

    let to_move = player_to_move(board);
    let mut best: Option<(Move, i8)> = None;

    for (mv, score) in scored_children(board) {
        let improves = match best {
            None => true,
            Some((_, best_score)) => match to_move {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improves {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(%mv, score, "Search picked move");
    }
    best.map(|(mv, _)| mv)
}

/// Value of the board under perfect play by both sides, from X's side.
///
/// `1` means X can force a win, `-1` O can force a win, `0` best play
/// draws. A terminal board scores its [`utility`].
#[instrument(skip(board))]
pub fn value(board: &Board) -> i8 {
    match player_to_move(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Every move that keeps the game-theoretic value of the board.
///
/// Empty on terminal boards. [`minimax`] always returns a member.
#[instrument(skip(board))]
pub fn optimal_moves(board: &Board) -> BTreeSet<Move> {
    if terminal(board) {
        return BTreeSet::new();
    }

    let children: Vec<(Move, i8)> = scored_children(board).collect();
    let best = match player_to_move(board) {
        Player::X => children.iter().map(|&(_, score)| score).max(),
        Player::O => children.iter().map(|&(_, score)| score).min(),
    };

    children
        .into_iter()
        .filter(|&(_, score)| Some(score) == best)
        .map(|(mv, _)| mv)
        .collect()
}

/// Each legal move paired with the value of the position it leads to.
fn scored_children(board: &Board) -> impl Iterator<Item = (Move, i8)> + '_ {
    let to_move = player_to_move(board);
    legal_moves(board).into_iter().filter_map(move |mv| {
        let child = apply_move(board, mv).ok()?;
        let score = match to_move {
            Player::X => min_value(&child),
            Player::O => max_value(&child),
        };
        Some((mv, score))
    })
}

/// Best score X can force when it is X's turn.
fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    legal_moves(board)
        .into_iter()
        .filter_map(|mv| apply_move(board, mv).ok())
        .map(|child| min_value(&child))
        .max()
        .unwrap_or_else(|| utility(board))
}

/// Best score O can force when it is O's turn.
fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    legal_moves(board)
        .into_iter()
        .filter_map(|mv| apply_move(board, mv).ok())
        .map(|child| max_value(&child))
        .min()
        .unwrap_or_else(|| utility(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_state;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&board), None);
        assert!(optimal_moves(&board).is_empty());
        assert_eq!(value(&board), 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move with two open wins; either is optimal.
        let board: Board = "XX./OO./...".parse().unwrap();
        let mv = minimax(&board).unwrap();
        let after = apply_move(&board, mv).unwrap();
        assert_eq!(utility(&after), 1);
        assert_eq!(value(&board), 1);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // O to move; X threatens the top row.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Move::new(0, 2)));
        assert_eq!(optimal_moves(&board), BTreeSet::from([Move::new(0, 2)]));
    }

    #[test]
    fn test_last_square() {
        let board: Board = "XOX/XOO/OX.".parse().unwrap();
        assert_eq!(minimax(&board), Some(Move::new(2, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = initial_state();
        assert_eq!(value(&board), 0);
        let mv = minimax(&board).unwrap();
        assert!(optimal_moves(&board).contains(&mv));
    }
}
