//! Plurdle
//!
//! A word guessing game: find the hidden word in a limited number of tries,
//! with each guess scored by exact-position matches and misplaced letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plurdle::dictionary::Dictionary;
//! use plurdle::game::{GameConfig, GameSession};
//! use plurdle::core::Word;
//!
//! let dictionary = Dictionary::builtin().unwrap();
//! let mut session = GameSession::new(&dictionary, GameConfig::default()).unwrap();
//! session.initialize().unwrap();
//!
//! let scored = session.submit_guess(&Word::new("crane").unwrap()).unwrap();
//! println!("matches: {:?}, close: {:?}", scored.score.matches(), scored.score.close());
//! ```

// Core domain types
pub mod core;

// Rounds, sessions and errors
pub mod game;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
