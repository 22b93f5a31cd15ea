//! Game-over invariant: the status agrees with the board.

use strictly_tictactoe::{check_winner, is_draw, is_full};

use super::Invariant;
use crate::{GameStatus, Session};

/// Invariant: the game is over exactly when the board is won or drawn.
///
/// `Won(p)` requires `p` to hold a completed line, `Draw` requires a full
/// board without one, and `InProgress` requires neither.
pub struct GameOverInvariant;

impl Invariant<Session> for GameOverInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        match session.status() {
            GameStatus::InProgress => !check_winner(board).is_win() && !is_full(board),
            GameStatus::Won(player) => check_winner(board).winner() == Some(player),
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game is over iff the board is won or drawn"
    }
}
