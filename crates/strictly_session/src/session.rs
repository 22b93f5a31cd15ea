//! Game session controller.
//!
//! A [`Session`] spans many boards and one score ledger. Each public
//! method is one user intent, processed to completion before the next.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, Line, Player, Position, Square, check_winner, empty_board, is_draw, next_player,
};
use tracing::{debug, info, instrument, warn};

use crate::{InvariantSet, ScoreRepository, Scores, SessionInvariants};

/// Title shown on the result dialog.
pub const DIALOG_TITLE: &str = "Game Over";

/// Current status of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board full without a line.
    Draw,
}

impl GameStatus {
    /// Whether the board accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result dialog state. Visibility never affects game transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Dialog {
    /// Whether the dialog is showing.
    visible: bool,
    /// Result message, empty while hidden.
    message: String,
}

impl Dialog {
    fn shown(message: impl Into<String>) -> Self {
        Self {
            visible: true,
            message: message.into(),
        }
    }
}

/// Why a cell selection changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The board already has a result.
    #[display("game is over")]
    GameOver,
    /// The square already holds a mark.
    #[display("{_0} is occupied")]
    Occupied(Position),
    /// The raw index does not name a square.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
}

/// What a cell selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// Mark placed, turn passed to `next`.
    Continued {
        /// Player now to move.
        next: Player,
    },
    /// Mark placed and completed `line`.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Mark placed and filled the board without a line.
    Draw,
}

/// Everything a presentation layer needs to render a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Board contents.
    board: Board,
    /// Line to highlight, if someone won.
    winning_line: Option<Line>,
    /// Running scores.
    scores: Scores,
    /// Player to move (or the last mover once the game is over).
    current_player: Player,
    /// Board status.
    status: GameStatus,
    /// Result dialog.
    dialog: Dialog,
}

/// One running game with its score ledger.
#[derive(Debug)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) scores: Scores,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<Line>,
    pub(crate) dialog: Dialog,
    repository: ScoreRepository,
}

impl Session {
    /// Starts a session, loading persisted scores once.
    ///
    /// Missing or unreadable scores start at zero.
    #[instrument(skip(repository), fields(backend = repository.backend_name()))]
    pub fn load(repository: ScoreRepository) -> Self {
        let scores = repository.load();
        info!(%scores, "Session started");
        let session = Self {
            board: empty_board(),
            current_player: Player::X,
            scores,
            status: GameStatus::InProgress,
            winning_line: None,
            dialog: Dialog::default(),
            repository,
        };
        session.check_invariants();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the running scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the board status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the board accepts no more moves.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the completed line, if someone won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the result dialog.
    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Selecting an occupied square or playing after the game ended is a
    /// silent no-op reported as [`CellOutcome::Ignored`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select_cell(&mut self, pos: Position) -> CellOutcome {
        if self.status.is_over() {
            debug!("Ignoring selection, game is over");
            return CellOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring selection, square occupied");
            return CellOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        let result = check_winner(&self.board);
        let outcome = if let (Some(winner), Some(line)) = (result.winner(), result.line()) {
            self.finish_with_win(winner, line);
            CellOutcome::Won { winner, line }
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            self.dialog = Dialog::shown("It's a draw!");
            info!("Game drawn");
            CellOutcome::Draw
        } else {
            self.current_player = next_player(player);
            CellOutcome::Continued {
                next: self.current_player,
            }
        };

        self.check_invariants();
        outcome
    }

    /// Like [`Session::select_cell`] for a raw board index (0-8).
    ///
    /// Out-of-range indices are ignored.
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> CellOutcome {
        match Position::from_index(index) {
            Some(pos) => self.select_cell(pos),
            None => {
                warn!(index, "Ignoring selection off the board");
                CellOutcome::Ignored(IgnoreReason::OutOfRange(index))
            }
        }
    }

    fn finish_with_win(&mut self, winner: Player, line: Line) {
        self.winning_line = Some(line);
        self.status = GameStatus::Won(winner);
        self.scores = self.scores.with_win(winner);
        info!(%winner, line = ?line.indices(), scores = %self.scores, "Game won");
        self.repository.save(&self.scores);
        self.dialog = Dialog::shown(format!("Player {} wins!", winner));
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart_board(&mut self) {
        self.board = empty_board();
        self.winning_line = None;
        self.status = GameStatus::InProgress;
        self.current_player = Player::X;
        self.dialog = Dialog::default();
        info!("Board restarted");
        self.check_invariants();
    }

    /// Sets both scores to zero and persists them. The board is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
        info!("Scores reset");
        self.repository.save(&self.scores);
    }

    /// Hides the result dialog. Safe to call any number of times.
    #[instrument(skip(self))]
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.visible {
            debug!("Dialog dismissed");
        }
        self.dialog = Dialog::default();
    }

    /// Captures the state a presentation layer renders.
    pub fn snapshot(&self) -> SessionView {
        SessionView {
            board: self.board.clone(),
            winning_line: self.winning_line,
            scores: self.scores,
            current_player: self.current_player,
            status: self.status,
            dialog: self.dialog.clone(),
        }
    }

    /// One-line description of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            panic!("session invariants violated: {:?}", violations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session() -> Session {
        Session::load(ScoreRepository::new(Box::new(MemoryStore::new())))
    }

    #[test]
    fn test_fresh_session() {
        let s = session();
        assert_eq!(s.current_player(), Player::X);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(!*s.dialog().visible());
        assert_eq!(s.status_line(), "Player X's turn");
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut s = session();
        assert_eq!(
            s.select_index(9),
            CellOutcome::Ignored(IgnoreReason::OutOfRange(9))
        );
        assert_eq!(s.board(), &empty_board());
    }

    #[test]
    fn test_ignore_reason_display() {
        assert_eq!(IgnoreReason::GameOver.to_string(), "game is over");
        assert_eq!(
            IgnoreReason::Occupied(Position::Center).to_string(),
            "Center is occupied"
        );
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut s = session();
        s.select_cell(Position::Center);
        let view = s.snapshot();
        assert_eq!(view.board(), s.board());
        assert_eq!(*view.current_player(), Player::O);
        assert_eq!(*view.status(), GameStatus::InProgress);
        assert_eq!(*view.winning_line(), None);
    }
}
