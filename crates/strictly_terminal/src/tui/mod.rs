//! Terminal UI: setup, event loop, teardown.

mod app;
mod ui;

pub use app::{App, Direction, Intent};
pub use ui::draw;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use strictly_session::Session;
use tracing::{debug, error, info, instrument, warn};

/// Puts the terminal back into cooked mode on drop.
///
/// Created as soon as raw mode is on, so every later failure (and a panic
/// in the game loop) still restores the terminal.
struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            alternate_screen: false,
        })
    }

    fn enter_alternate_screen(&mut self, stdout: &mut Stdout) -> Result<()> {
        execute!(stdout, EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }

        if self.alternate_screen
            && let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show)
        {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the game until the player quits.
///
/// The terminal is restored even when set-up or the loop fails.
#[instrument(skip_all)]
pub fn run_tui(session: Session) -> Result<()> {
    info!("Starting terminal UI");

    let mut guard = TerminalGuard::enable()?;
    let mut stdout = io::stdout();
    guard.enter_alternate_screen(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(session);
    let res = event_loop(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = %app.session().scores(), "Terminal UI closed");
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_without_alternate_screen() {
        // Raw mode was never enabled here, so restoring must be a quiet no-op.
        let guard = TerminalGuard {
            alternate_screen: false,
        };
        drop(guard);
    }
}
