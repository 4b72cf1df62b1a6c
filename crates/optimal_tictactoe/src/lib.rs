//! Optimal tic-tac-toe - pure rules and exhaustive minimax search.
//!
//! Every function here is pure: boards are `Copy` values, transitions return
//! new boards, and nothing is shared between calls, so searches on different
//! boards can run on different threads without coordination.
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{apply_move, initial_state, minimax, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0); // perfect play draws
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod invariants;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::Move;
pub use outcome::Outcome;
pub use types::{Board, Player, Rows, SIZE, Square};

// Crate-level exports - Errors
pub use error::{BoardError, BoardErrorKind, InvalidMoveError, InvalidMoveKind, ParseMoveError};

// Crate-level exports - Rules
pub use rules::win::{LINES, completes_line, winning_line};
pub use rules::{
    apply_move, initial_state, is_full, legal_moves, outcome, player_to_move, terminal, utility,
    winner,
};

// Crate-level exports - Search
pub use search::{minimax, optimal_moves, value};
