//! TUI application state and logic

use crate::core::{Keyboard, Tile, Word};
use crate::game::{GameSession, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a, R = ThreadRng> {
    pub session: GameSession<'a, R>,
    pub rows: Vec<Row>,
    pub input: String,
    pub keyboard: Keyboard,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

/// A submitted guess with its tile colors
#[derive(Debug, Clone)]
pub struct Row {
    pub word: Word,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = guesses needed to win
    pub guess_distribution: Vec<usize>,
}

impl<'a, R: Rng> App<'a, R> {
    /// Wrap a session and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot draw a target.
    pub fn new(mut session: GameSession<'a, R>) -> Result<Self> {
        session.initialize()?;
        let max_tries = session.max_tries();

        let mut app = Self {
            session,
            rows: Vec::new(),
            input: String::new(),
            keyboard: Keyboard::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; max_tries + 1],
                ..Statistics::default()
            },
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message("Welcome to Plurdle! Type a word and press Enter.", MessageStyle::Info);
        Ok(app)
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.config().word_length
    }

    pub fn type_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.input.len() < self.word_length() {
            self.input.push(letter.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        if self.input_mode == InputMode::Guessing {
            self.input.pop();
        }
    }

    /// Submit the typed row
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal session failures.
    pub fn submit(&mut self) -> Result<()> {
        if self.input_mode != InputMode::Guessing {
            return Ok(());
        }
        if self.input.len() != self.word_length() {
            self.add_message(
                &format!("Word must be exactly {} letters!", self.word_length()),
                MessageStyle::Error,
            );
            return Ok(());
        }

        let guess = match Word::with_length(&self.input, self.word_length()) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return Ok(());
            }
        };

        let scored = match self.session.submit_guess(&guess) {
            Ok(scored) => scored,
            Err(e) if e.is_recoverable() => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let tiles = scored.score.tiles(&scored.guess);
        self.keyboard.record(&scored.guess, &tiles);
        self.rows.push(Row {
            word: scored.guess,
            tiles,
        });
        self.input.clear();

        match self.session.status() {
            Some(GameStatus::Won) => self.finish(true),
            Some(GameStatus::Lost) => self.finish(false),
            _ => {}
        }
        Ok(())
    }

    fn finish(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if won {
            self.stats.games_won += 1;
            let guesses = self.rows.len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
            debug!(guesses, "round won");
            self.add_message("You win :)", MessageStyle::Success);
        } else {
            let word = self
                .session
                .revealed_target()
                .map(Word::shout)
                .unwrap_or_default();
            debug!("round lost");
            self.add_message(
                &format!("You lose. :( The word was {word}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Enter to play again or Esc to quit.", MessageStyle::Info);
    }

    /// Start a new round
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot draw a target.
    pub fn new_game(&mut self) -> Result<()> {
        self.session.initialize()?;
        self.rows.clear();
        self.input.clear();
        self.keyboard.reset();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal session failures.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit()?,
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
