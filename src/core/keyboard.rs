//! On-screen keyboard state
//!
//! Each letter key remembers the best feedback it has received this round.
//! A key colored as a match never falls back to close or wrong.

use super::{Tile, Word};
use rustc_hash::FxHashMap;

/// Key rows as drawn on screen
pub const KEYBOARD_LAYOUT: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["enter", "z", "x", "c", "v", "b", "n", "m", "backspace"],
];

/// Keys drawn wider than letters
pub const BIG_KEYS: [&str; 2] = ["enter", "backspace"];

/// Feedback shown on a key, ordered by precedence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyState {
    #[default]
    Unused,
    Wrong,
    Close,
    Match,
}

impl From<Tile> for KeyState {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Match => Self::Match,
            Tile::Close => Self::Close,
            Tile::Wrong => Self::Wrong,
        }
    }
}

/// Letter key colors for the current round
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    keys: FxHashMap<u8, KeyState>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored row into the key colors
    pub fn record(&mut self, guess: &Word, tiles: &[Tile]) {
        for (&letter, &tile) in guess.letters().iter().zip(tiles) {
            let state = self.keys.entry(letter).or_default();
            *state = (*state).max(KeyState::from(tile));
        }
    }

    /// Current color of a letter key
    #[must_use]
    pub fn state(&self, letter: u8) -> KeyState {
        self.keys
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    fn record(keyboard: &mut Keyboard, target: &str, guess: &str) {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        let tiles = Score::calculate(&guess, &target).tiles(&guess);
        keyboard.record(&guess, &tiles);
    }

    #[test]
    fn keys_start_unused() {
        let keyboard = Keyboard::new();
        assert_eq!(keyboard.state(b'a'), KeyState::Unused);
    }

    #[test]
    fn keys_take_tile_colors() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "speak", "steak");

        assert_eq!(keyboard.state(b's'), KeyState::Match);
        assert_eq!(keyboard.state(b't'), KeyState::Wrong);
        assert_eq!(keyboard.state(b'K'), KeyState::Match);
    }

    #[test]
    fn match_never_downgrades() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "speak", "steak");
        // 's' is wrong-position here but was already a match
        record(&mut keyboard, "speak", "pools");

        assert_eq!(keyboard.state(b's'), KeyState::Match);
        assert_eq!(keyboard.state(b'p'), KeyState::Close);
        assert_eq!(keyboard.state(b'o'), KeyState::Wrong);
    }

    #[test]
    fn close_upgrades_to_match() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "speak", "pools");
        assert_eq!(keyboard.state(b'p'), KeyState::Close);

        record(&mut keyboard, "speak", "spoke");
        assert_eq!(keyboard.state(b'p'), KeyState::Match);
    }

    #[test]
    fn reset_clears_keys() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "speak", "steak");
        keyboard.reset();
        assert_eq!(keyboard.state(b's'), KeyState::Unused);
    }

    #[test]
    fn layout_covers_alphabet() {
        let letters: Vec<&str> = KEYBOARD_LAYOUT
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|key| !BIG_KEYS.contains(key))
            .collect();
        assert_eq!(letters.len(), 26);
    }
}
