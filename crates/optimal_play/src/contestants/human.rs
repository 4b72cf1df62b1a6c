//! Human contestant reading moves from a line-oriented input.

use super::Contestant;
use anyhow::{Context, Result};
use optimal_tictactoe::{Board, InvalidMoveError, Move, optimal_moves, player_to_move};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player typing moves, one per line.
///
/// A line holds either a keypad digit `1`-`9` (matching the numbers shown
/// on empty squares) or `row,col` with 0-based coordinates.
pub struct HumanContestant<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a new human contestant.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints: false,
        }
    }

    /// Shows the optimal moves before each turn.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Consumes the contestant, returning its input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn show_hints(&mut self, board: &Board) -> Result<()> {
        let keys: Vec<String> = optimal_moves(board)
            .into_iter()
            .filter_map(|mv| mv.index())
            .map(|i| (i + 1).to_string())
            .collect();
        writeln!(self.output, "Hint: best squares are {}", keys.join(", "))?;
        Ok(())
    }
}

/// Reads a keypad digit or `row,col`.
fn parse_move(line: &str) -> Option<Move> {
    let line = line.trim();
    if let Ok(key) = line.parse::<usize>()
        && (1..=9).contains(&key)
    {
        return Move::from_index(key - 1);
    }
    line.parse().ok()
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        if self.hints {
            self.show_hints(board)?;
        }

        loop {
            write!(
                self.output,
                "{} ({}), your move [1-9 or row,col]: ",
                self.name,
                player_to_move(board)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match parse_move(&line) {
                Some(mv) => {
                    debug!(human = %self.name, %mv, "Human chose move");
                    return Ok(mv);
                }
                None => {
                    warn!(input = line.trim(), "Unreadable move");
                    writeln!(self.output, "Cannot read move from {:?}", line.trim())?;
                }
            }
        }
    }

    fn reject(&mut self, err: &InvalidMoveError) -> Result<()> {
        warn!(human = %self.name, kind = %err.kind, "Move rejected");
        writeln!(self.output, "Not allowed: {}. Try again.", err.kind)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
