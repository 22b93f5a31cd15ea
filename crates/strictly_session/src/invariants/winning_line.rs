//! Winning-line invariant: the highlight matches the board.

use strictly_tictactoe::check_winner;

use super::Invariant;
use crate::{GameStatus, Session};

/// Invariant: a winning line is recorded iff the game was won, and it is
/// the line the rules engine reports for the board.
pub struct WinningLineInvariant;

impl Invariant<Session> for WinningLineInvariant {
    fn holds(session: &Session) -> bool {
        let won = matches!(session.status(), GameStatus::Won(_));
        session.winning_line().is_some() == won
            && session.winning_line() == check_winner(session.board()).line()
    }

    fn description() -> &'static str {
        "Winning line is present iff the game was won, and matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ScoreRepository};
    use strictly_tictactoe::{LINES, Player, Position};

    fn session() -> Session {
        Session::load(ScoreRepository::new(Box::new(MemoryStore::new())))
    }

    #[test]
    fn test_fresh_session_holds() {
        assert!(WinningLineInvariant::holds(&session()));
    }

    #[test]
    fn test_stale_line_violates() {
        let mut s = session();
        s.winning_line = Some(LINES[0]);
        assert!(!WinningLineInvariant::holds(&s));
    }

    #[test]
    fn test_missing_line_after_win_violates() {
        let mut s = session();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            s.select_cell(pos);
        }
        assert_eq!(s.status(), GameStatus::Won(Player::X));
        assert!(WinningLineInvariant::holds(&s));

        s.winning_line = None;
        assert!(!WinningLineInvariant::holds(&s));
    }
}
