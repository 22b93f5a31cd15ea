//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_session::{CellOutcome, Session};
use strictly_tictactoe::Position;
use tracing::{debug, info, instrument};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select a square directly.
    Select(Position),
    /// Select the square under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Clear the board.
    Restart,
    /// Zero the scoreboard.
    ResetScores,
    /// Close the result dialog.
    DismissDialog,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application around a loaded session.
    #[instrument(skip(session))]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback for the last ignored selection, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status bar text.
    pub fn status_text(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{} ({})", self.session.status_line(), notice),
            None => self.session.status_line(),
        }
    }

    /// Decodes a key press.
    ///
    /// While the result dialog is showing, board keys are inactive and
    /// Enter, Space or Esc close the dialog.
    pub fn intent_for(&self, key: KeyEvent) -> Option<Intent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        let common = match key.code {
            KeyCode::Char('q') => Some(Intent::Quit),
            KeyCode::Char('r') => Some(Intent::Restart),
            KeyCode::Char('s') => Some(Intent::ResetScores),
            _ => None,
        };
        if common.is_some() {
            return common;
        }

        if *self.session.dialog().visible() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(Intent::DismissDialog),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| Position::from_index(d as usize - 1))
                .map(Intent::Select),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::SelectCursor),
            KeyCode::Up => Some(Intent::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Intent::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Intent::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Intent::MoveCursor(Direction::Right)),
            _ => None,
        }
    }

    /// Applies an intent to the session.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Select(pos) => self.select(pos),
            Intent::SelectCursor => self.select(self.cursor),
            Intent::MoveCursor(direction) => self.move_cursor(direction),
            Intent::Restart => {
                self.notice = None;
                self.session.restart_board();
            }
            Intent::ResetScores => {
                self.notice = None;
                self.session.reset_scores();
            }
            Intent::DismissDialog => self.session.dismiss_dialog(),
            Intent::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Decodes and applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(intent) = self.intent_for(key) {
            self.apply(intent);
        }
    }

    fn select(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.select_cell(pos) {
            CellOutcome::Ignored(reason) => {
                debug!(%reason, "Selection ignored");
                self.notice = Some(reason.to_string());
            }
            outcome => {
                debug!(?outcome, "Selection applied");
                self.notice = None;
            }
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
        };
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }
}
