//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a move was rejected by [`crate::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveKind {
    /// The coordinates are outside the 3x3 grid.
    #[display("({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("square ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A player has already completed a line.
    #[display("game is already over")]
    GameOver,
}

/// Move rejected by the rules, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMoveError {
    /// Why the move was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidMoveError {
    /// Creates a new invalid move error with caller location tracking.
    #[track_caller]
    #[instrument(level = "trace")]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reason a board could not be built from outside data.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Mark counts cannot arise from alternating play starting with X.
    #[display("{x} X marks and {o} O marks cannot arise from alternating play")]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players have completed a line.
    #[display("both players have three in a row")]
    TwoWinners,

    /// The text form could not be read.
    #[display("{message}")]
    Parse {
        /// What was wrong with the input.
        message: String,
    },
}

/// Board construction error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Why the board was rejected.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(level = "trace")]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Move text that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read move from {:?} at {}:{}", input, file, line)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseMoveError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(input: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
