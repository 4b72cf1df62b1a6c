//! Derived game outcome.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a board stands. Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    NoWinnerYet,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// The board is full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::NoWinnerYet | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::NoWinnerYet)
    }
}

impl From<Player> for Outcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoWinnerYet => write!(f, "In progress"),
            Outcome::XWins => write!(f, "Player X wins"),
            Outcome::OWins => write!(f, "Player O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
