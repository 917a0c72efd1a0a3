//! Formatting utilities for terminal output

use crate::core::{KeyState, Keyboard, Tile, Word};
use colored::{ColoredString, Colorize};

/// Color one letter as a tile
#[must_use]
pub fn colored_tile(letter: char, tile: Tile) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match tile {
        Tile::Match => text.black().on_green().bold(),
        Tile::Close => text.black().on_yellow().bold(),
        Tile::Wrong => text.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, tiles: &[Tile]) -> String {
    guess
        .text()
        .chars()
        .zip(tiles)
        .map(|(letter, &tile)| colored_tile(letter, tile).to_string())
        .collect()
}

/// Render the letter keys, one line per keyboard row
#[must_use]
pub fn colored_keyboard(keyboard: &Keyboard) -> Vec<String> {
    crate::core::KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .filter(|key| key.len() == 1)
                .map(|key| {
                    let letter = key.as_bytes()[0];
                    let label = key.to_uppercase();
                    match keyboard.state(letter) {
                        KeyState::Match => label.black().on_green().to_string(),
                        KeyState::Close => label.black().on_yellow().to_string(),
                        KeyState::Wrong => label.bright_black().to_string(),
                        KeyState::Unused => label.white().bold().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
