//! Turn loop driving two contestants through one game.

use crate::contestants::Contestant;
use anyhow::Result;
use optimal_tictactoe::{
    Board, Move, Outcome, Player, apply_move, initial_state, outcome, player_to_move, terminal,
    winning_line,
};
use std::io::Write;
use tracing::{debug, info, instrument};

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Final classification of the board.
    pub outcome: Outcome,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// The terminal board.
    pub board: Board,
}

/// Plays one game from the empty board and writes each position to `out`.
///
/// Moves the engine rejects are handed back to the contestant that chose
/// them through [`Contestant::reject`], which decides whether to try again.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(
    x: &mut dyn Contestant,
    o: &mut dyn Contestant,
    out: &mut dyn Write,
) -> Result<MatchReport> {
    info!("Starting game");
    let mut board = initial_state();
    let mut moves = Vec::new();

    writeln!(out, "{}\n", board)?;

    while !terminal(&board) {
        let to_move = player_to_move(&board);
        let contestant: &mut dyn Contestant = match to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let (mv, next) = loop {
            let mv = contestant.choose_move(&board)?;
            match apply_move(&board, mv) {
                Ok(next) => break (mv, next),
                Err(err) => contestant.reject(&err)?,
            }
        };

        debug!(player = %to_move, %mv, "Move played");
        writeln!(out, "{} ({}) plays {}\n", contestant.name(), to_move, mv)?;
        writeln!(out, "{}\n", next)?;

        moves.push(mv);
        board = next;
    }

    let result = outcome(&board);
    match winning_line(&board) {
        Some(line) => {
            let squares: Vec<String> = line.iter().map(ToString::to_string).collect();
            writeln!(out, "{} along {}", result, squares.join(" "))?;
        }
        None => writeln!(out, "{}", result)?,
    }
    info!(outcome = %result, plies = moves.len(), "Game finished");

    Ok(MatchReport {
        outcome: result,
        moves,
        board,
    })
}
