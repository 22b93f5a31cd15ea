//! Pure tic-tac-toe rules.
//!
//! This crate owns the board representation and the four rule functions
//! every front-end builds on:
//!
//! - [`empty_board`] - a fresh 3x3 board
//! - [`check_winner`] - first completed line, in fixed enumeration order
//! - [`is_draw`] - full board without a winner
//! - [`next_player`] - turn toggle
//!
//! Everything here is side-effect free. The same board always yields the
//! same answer, so callers are free to evaluate as often as they like.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{check_winner, empty_board, Player, Position, Square};
//!
//! let mut board = empty_board();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
//!     board.set(pos, Square::Occupied(Player::X));
//! }
//!
//! let result = check_winner(&board);
//! assert_eq!(result.winner(), Some(Player::X));
//! assert_eq!(result.line().map(|l| l.indices()), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod rules;
mod types;

pub use position::Position;
pub use rules::{LINES, Line, WinResult, check_winner, empty_board, is_draw, is_full, next_player};
pub use types::{Board, Player, Square};
