//! Terminal front-end for tic-tac-toe.
//!
//! Renders a [`strictly_session::Session`] with ratatui and turns key
//! presses into session intents. All game logic lives in the session; this
//! crate only reads its state and forwards what the player asked for.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod logging;
mod tui;

pub use cli::{Cli, Command, DATA_DIR_ENV, DEFAULT_CONFIG_FILE};
pub use logging::init_tracing;
pub use tui::{App, Direction, Intent, draw, run_tui};
