//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::{BoardError, BoardErrorKind};
use crate::invariants::{Invariant, MarkBalanceInvariant, SingleWinnerInvariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Rows of squares, row-major.
pub type Rows = [[Square; SIZE]; SIZE];

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition in [`crate::apply_move`]
/// returns a fresh copy and leaves its input untouched. Boards built from
/// outside data go through [`Board::from_rows`] (also used by `FromStr` and
/// serde), which rejects any grid that could not arise from alternating
/// play starting with X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Board {
    rows: Rows,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from rows of squares, validating turn balance and
    /// that at most one player has completed a line.
    #[instrument]
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        let board = Self { rows };

        if !MarkBalanceInvariant::holds(&board) {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            warn!(x, o, "Rejected board: {}", MarkBalanceInvariant::description());
            return Err(BoardError::new(BoardErrorKind::Unbalanced { x, o }));
        }

        if !SingleWinnerInvariant::holds(&board) {
            warn!("Rejected board: {}", SingleWinnerInvariant::description());
            return Err(BoardError::new(BoardErrorKind::TwoWinners));
        }

        Ok(board)
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the square a move points at, or `None` off the board.
    pub fn at(&self, mv: Move) -> Option<Square> {
        self.get(mv.row(), mv.col())
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with one square replaced.
    ///
    /// Callers check that `mv` is on the board.
    pub(crate) fn with_square(mut self, mv: Move, square: Square) -> Self {
        self.rows[mv.row()][mv.col()] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Rows> for Board {
    type Error = BoardError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl fmt::Display for Board {
    /// Formats the board with empty squares shown as their keypad number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", r * SIZE + c + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if c < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if r < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine squares in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and the keypad digits `1`-`9`
    /// are empty squares. Whitespace, `/`, `|`, `-` and `+` are ignored, so
    /// both `"XO./.X./..O"` and the `Display` form parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(SIZE * SIZE);

        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Square::Empty,
                '/' | '|' | '+' | '-' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardError::new(BoardErrorKind::Parse {
                        message: format!("unexpected character {:?}", other),
                    }));
                }
            };
            squares.push(square);
        }

        if squares.len() != SIZE * SIZE {
            return Err(BoardError::new(BoardErrorKind::Parse {
                message: format!("expected 9 squares, found {}", squares.len()),
            }));
        }

        let mut rows = [[Square::Empty; SIZE]; SIZE];
        for (i, square) in squares.into_iter().enumerate() {
            rows[i / SIZE][i % SIZE] = square;
        }
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().all(Square::is_empty));
        assert_eq!(board.squares().count(), 9);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_from_rows_accepts_balanced() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, E]]).unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_from_rows_rejects_o_first() {
        let err = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Unbalanced { x: 0, o: 1 });
    }

    #[test]
    fn test_from_rows_rejects_x_two_ahead() {
        let err = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Unbalanced { x: 2, o: 0 });
    }

    #[test]
    fn test_from_rows_rejects_two_winners() {
        let err = Board::from_rows([[X, X, X], [O, O, O], [E, E, E]]).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::TwoWinners);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(Square::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.rows(), &[[X, O, E], [E, X, E], [E, E, O]]);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let shown = board.to_string();
        assert_eq!(shown, "X|O|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
        assert_eq!(shown.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert!(matches!(err.kind, BoardErrorKind::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "XO?/.../...".parse::<Board>().unwrap_err();
        assert!(matches!(err.kind, BoardErrorKind::Parse { .. }));
    }

    #[test]
    fn test_serde_validates() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let bad = serde_json::to_string(&[[O, E, E], [E, E, E], [E, E, E]]).unwrap();
        assert!(serde_json::from_str::<Board>(&bad).is_err());
    }
}
