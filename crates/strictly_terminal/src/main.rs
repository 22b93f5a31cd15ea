//! Tic-tac-toe - terminal entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_session::{ScoreRepository, Session, select_store};
use strictly_terminal::{Cli, Command, DATA_DIR_ENV, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let env_data_dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let config = cli.resolve_config(&cwd, env_data_dir)?;

    init_tracing(config.log());
    info!(command = ?cli.command(), backend = %config.store().backend(), "Starting tictactoe");

    let repository = ScoreRepository::new(select_store(config.store()));

    match cli.command() {
        Command::Play => run_tui(Session::load(repository)),
        Command::Scores => {
            println!("{}", repository.load());
            Ok(())
        }
        Command::ResetScores => {
            let mut session = Session::load(repository);
            session.reset_scores();
            println!("Scores reset. {}", session.scores());
            Ok(())
        }
        Command::ForgetScores => {
            if repository.clear() {
                println!("Saved scores deleted.");
            } else {
                eprintln!("Could not delete saved scores; see the log for details.");
            }
            Ok(())
        }
    }
}
