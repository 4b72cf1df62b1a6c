//! One-shot report on a board.

use anyhow::Result;
use optimal_tictactoe::{
    Board, minimax, optimal_moves, outcome, player_to_move, terminal, value,
};
use std::io::Write;
use tracing::instrument;

/// Writes who is to move, the engine's move, the board value and every
/// optimal move. A terminal board reports its outcome instead.
#[instrument(skip_all)]
pub fn analyze(board: &Board, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}\n", board)?;

    if terminal(board) {
        writeln!(out, "Game over: {}", outcome(board))?;
        return Ok(());
    }

    let verdict = match value(board) {
        1 => "X can force a win",
        -1 => "O can force a win",
        _ => "best play draws",
    };
    let optimal: Vec<String> = optimal_moves(board).iter().map(ToString::to_string).collect();

    writeln!(out, "To move: {}", player_to_move(board))?;
    if let Some(mv) = minimax(board) {
        writeln!(out, "Best move: {}", mv)?;
    }
    writeln!(out, "Value: {} ({})", value(board), verdict)?;
    writeln!(out, "Optimal moves: {}", optimal.join(" "))?;
    Ok(())
}
