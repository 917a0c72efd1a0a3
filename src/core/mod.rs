//! Core domain types for the game
//!
//! Words, guess scoring and keyboard feedback. Everything here is pure and
//! independent of the session, the dictionary and the terminal.

mod keyboard;
mod score;
mod word;

pub use keyboard::{BIG_KEYS, KEYBOARD_LAYOUT, KeyState, Keyboard};
pub use score::{Score, Tile, tiles_to_emoji};
pub use word::{WORD_LENGTH, Word, WordError};
