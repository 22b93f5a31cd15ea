//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// Three positions that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The positions of this line, in visual order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The raw board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Outcome of [`check_winner`].
///
/// Winner and line are either both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Option<Line>,
}

impl WinResult {
    /// A win for `winner` along `line`.
    pub fn won(winner: Player, line: Line) -> Self {
        Self {
            winner: Some(winner),
            line: Some(line),
        }
    }

    /// No winner.
    pub fn none() -> Self {
        Self {
            winner: None,
            line: None,
        }
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// Whether somebody won.
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first line whose three
/// squares hold the same player decides the result. A board with more
/// than one completed line reports the earliest one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult::won(player, line);
        }
    }

    WinResult::none()
}
