//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Nothing here keeps
//! state between calls; every transition returns a new board.

pub mod draw;
pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use moves::{apply_move, legal_moves};
pub use terminal::{outcome, terminal, utility};
pub use turn::{initial_state, player_to_move};
pub use win::winner;
