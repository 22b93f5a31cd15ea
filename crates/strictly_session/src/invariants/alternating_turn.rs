//! Alternating turn invariant: X moves first, then O, then X, ...

use strictly_tictactoe::Player;

use super::Invariant;
use crate::{GameStatus, Session};

/// Invariant: mark counts and the current player agree with strict
/// alternation starting from X.
///
/// While in progress the player to move is X when counts are equal and O
/// when X is one ahead. Once the game is over the turn is not passed, so
/// the current player is the one who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        let last_mover = if x == o { Player::O } else { Player::X };
        match session.status() {
            GameStatus::InProgress => {
                let to_move = if x == o { Player::X } else { Player::O };
                session.current_player() == to_move
            }
            GameStatus::Won(winner) => winner == last_mover && session.current_player() == winner,
            GameStatus::Draw => session.current_player() == last_mover,
        }
    }

    fn description() -> &'static str {
        "Players alternate starting with X, and the turn stops at game end"
    }
}
