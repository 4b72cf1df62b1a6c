//! Move coordinates for tic-tac-toe.
//!
//! A move names a square by `(row, col)`. The type itself does not restrict
//! the range so that callers can hand over raw input; [`crate::apply_move`]
//! rejects anything off the board.

use crate::error::ParseMoveError;
use crate::types::SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A square to mark, as `(row, col)`.
///
/// Ordering is row-major, so sets of moves enumerate top-left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Checks whether the move lies on the 3x3 grid.
    pub fn is_on_board(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Creates a move from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self::new(index / SIZE, index % SIZE))
    }

    /// Converts the move to a row-major board index (0-8).
    pub fn index(&self) -> Option<usize> {
        self.is_on_board().then(|| self.row * SIZE + self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `"row,col"` or `"row col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseMoveError::new(s));
        };

        match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok(Self::new(row, col)),
            _ => Err(ParseMoveError::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_over_board() {
        for index in 0..9 {
            let mv = Move::from_index(index).unwrap();
            assert_eq!(mv.index(), Some(index));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_off_board_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert!(!Move::new(0, 3).is_on_board());
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Move::new(0, 2) < Move::new(1, 0));
        assert!(Move::new(1, 0) < Move::new(1, 1));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1,2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!(" 2 0 ".parse::<Move>().unwrap(), Move::new(2, 0));
        assert_eq!("(0, 1)".parse::<Move>().unwrap(), Move::new(0, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1,2,3".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
        assert!("-1,0".parse::<Move>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(2, 1).to_string(), "(2, 1)");
    }
}
