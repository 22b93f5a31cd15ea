//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_session::{DIALOG_TITLE, SessionView};
use strictly_tictactoe::{Player, Position, Square};

use super::App;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

const CONTROLS: &str = "1-9/arrows+Enter: play   r: restart   s: reset scores   q: quit";

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Yellow,
    }
}

/// Renders the whole screen from a snapshot of the session.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.session().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Controls
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], &view);
    draw_board(frame, chunks[2], &view, app.cursor());

    let controls = Paragraph::new(CONTROLS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[4]);

    if *view.dialog().visible() {
        draw_dialog(frame, area, view.dialog().message());
    }
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, view: &SessionView) {
    let scores = view.scores();
    let current = *view.current_player();

    let card = |player: Player| {
        let mut style = Style::default().fg(player_color(player));
        if player == current && !view.status().is_over() {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!(" Player {}: {} ", player, scores.get(player)), style)
    };

    let line = Line::from(vec![
        card(Player::X),
        Span::raw("   Turn: "),
        Span::styled(
            current.to_string(),
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        card(Player::O),
    ]);

    let scoreboard = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, positions) in ROWS.iter().enumerate() {
        draw_row(frame, rows[i * 2], view, cursor, positions);
        if i < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &SessionView,
    cursor: Position,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], view, cursor, *pos);
        if i < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, pos: Position) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view
        .winning_line()
        .as_ref()
        .is_some_and(|line| line.contains(pos))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == cursor && !view.status().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let cell = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(cell, area);
}

fn draw_dialog(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 32, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]  Enter",
            Style::default().fg(Color::Blue),
        )),
    ];

    let dialog = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(DIALOG_TITLE)
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(dialog, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
