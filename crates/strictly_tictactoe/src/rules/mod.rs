//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the session layer can compose them freely.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, WinResult, check_winner};

use tracing::instrument;

use crate::{Board, Player};

/// Returns a fresh board with every square empty.
#[instrument]
pub fn empty_board() -> Board {
    Board::new()
}

/// Returns the player who moves after `current`.
#[instrument]
pub fn next_player(current: Player) -> Player {
    current.opponent()
}
