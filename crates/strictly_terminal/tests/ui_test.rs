//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend};
use strictly_session::{MemoryStore, ScoreRepository, Session};
use strictly_terminal::{App, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn app() -> App {
    App::new(Session::load(ScoreRepository::new(Box::new(MemoryStore::new()))))
}

#[test]
fn test_renders_title_scores_and_turn() {
    let screen = render(&app());
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player X: 0"));
    assert!(screen.contains("Player O: 0"));
    assert!(screen.contains("Player X's turn"));
    assert!(!screen.contains("Game Over"));
}

#[test]
fn test_renders_dialog_after_win() {
    let mut app = app();
    for i in [0, 3, 1, 4, 2] {
        app.apply(strictly_terminal::Intent::Select(
            strictly_tictactoe::Position::from_index(i).expect("index"),
        ));
    }
    let screen = render(&app);
    assert!(screen.contains("Game Over"));
    assert!(screen.contains("Player X wins!"));
    assert!(screen.contains("Player X: 1"));
}

#[test]
fn test_renders_in_tiny_terminal() {
    let mut terminal = Terminal::new(TestBackend::new(10, 5)).expect("terminal");
    let app = app();
    terminal.draw(|f| draw(f, &app)).expect("draw");
}

#[test]
fn test_renders_session_snapshot() {
    use strictly_session::{KeyValueStore, SCORES_KEY};
    use strictly_tictactoe::{Player, Position, Square};

    let store = MemoryStore::new();
    store.set(SCORES_KEY, r#"{"X":3,"O":5}"#).expect("seed");
    let mut app = App::new(Session::load(ScoreRepository::new(Box::new(store))));
    app.apply(strictly_terminal::Intent::Select(Position::Center));

    let view = app.session().snapshot();
    assert_eq!(view.board().get(Position::Center), Square::Occupied(Player::X));

    let screen = render(&app);
    assert!(screen.contains(&format!("Player X: {}", view.scores().get(Player::X))));
    assert!(screen.contains("Player O: 5"));
    assert!(screen.contains("Player O's turn"));
}
