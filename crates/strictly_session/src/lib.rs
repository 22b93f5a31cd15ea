//! Tic-tac-toe session controller with a persisted scoreboard.
//!
//! # Architecture
//!
//! - **Session**: owns the board, turn, scores and result dialog, and
//!   sequences calls into the rules engine for each user intent
//! - **Scores**: the two-counter score record and its repository
//! - **Store**: key-value persistence behind [`KeyValueStore`], with file,
//!   memory and no-op backends chosen once at start-up
//! - **Invariants**: logical properties of a session, checked in debug
//!   builds after every transition
//! - **Config**: TOML configuration for the store and logging
//!
//! # Example
//!
//! ```
//! use strictly_session::{CellOutcome, MemoryStore, ScoreRepository, Session};
//! use strictly_tictactoe::{Player, Position};
//!
//! let repository = ScoreRepository::new(Box::new(MemoryStore::new()));
//! let mut session = Session::load(repository);
//!
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//! ] {
//!     session.select_cell(pos);
//! }
//! let outcome = session.select_cell(Position::TopRight);
//!
//! assert!(matches!(outcome, CellOutcome::Won { winner: Player::X, .. }));
//! assert_eq!(session.scores().get(Player::X), 1);
//! assert_eq!(session.dialog().message(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod invariants;
mod scores;
mod session;
mod store;

pub use config::{AppConfig, ConfigError, LogConfig, StoreConfig};
pub use error::StoreError;
pub use invariants::{
    AlternatingTurnInvariant, GameOverInvariant, Invariant, InvariantSet, InvariantViolation,
    SessionInvariants, WinningLineInvariant,
};
pub use scores::{SCORES_KEY, ScoreRepository, Scores};
pub use session::{CellOutcome, DIALOG_TITLE, Dialog, GameStatus, IgnoreReason, Session, SessionView};
pub use store::{
    FileStore, KeyValueStore, MemoryStore, NullStore, StoreBackend, select_store, select_store_from,
};
