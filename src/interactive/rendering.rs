//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, messages and a status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BIG_KEYS, KEYBOARD_LAYOUT, KeyState, Tile};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 PLURDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Match => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tile::Close => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tile::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Match => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::Close => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyState::Wrong => Style::default().fg(Color::DarkGray),
        KeyState::Unused => Style::default().fg(Color::White),
    }
}

/// One line per try: scored rows, then the row being typed, then blanks
fn board_lines<R: Rng>(app: &App<'_, R>) -> Vec<Line<'static>> {
    let length = app.word_length();
    let max_tries = app.session.max_tries();
    let mut lines = Vec::with_capacity(max_tries);

    for row in &app.rows {
        let spans = row
            .word
            .text()
            .chars()
            .zip(&row.tiles)
            .flat_map(|(letter, &tile)| {
                [
                    Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        tile_style(tile),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    if app.input_mode == InputMode::Guessing && lines.len() < max_tries {
        let typed = app.input.to_ascii_uppercase();
        let spans = (0..length)
            .flat_map(|i| {
                let cell = typed.chars().nth(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |c| {
                        Span::styled(
                            format!(" {c} "),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                [cell, Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    while lines.len() < max_tries {
        let blank = " ·  ".repeat(length);
        lines.push(Line::styled(blank, Style::default().fg(Color::DarkGray)));
    }

    lines
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let lines = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|key| {
                    let cell = if BIG_KEYS.contains(key) {
                        Span::styled(
                            format!("[{}]", key.to_uppercase()),
                            Style::default().fg(Color::Cyan),
                        )
                    } else {
                        let state = app.keyboard.state(key.as_bytes()[0]);
                        Span::styled(format!(" {} ", key.to_uppercase()), key_style(state))
                    };
                    [cell, Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let tries_text = format!("Tries: {}/{}", app.session.tries(), app.session.max_tries());
    let tries = Paragraph::new(tries_text).alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "Enter/n: New Game | Esc/q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
