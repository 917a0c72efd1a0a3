//! Guess scoring
//!
//! A score describes one guess against the hidden target:
//! - the set of positions that are exact matches
//! - a closeness map from letter to the number of unmatched target occurrences
//!   of that letter which also appear somewhere in the guess
//!
//! Tiles (green/yellow/white) are derived from a score for display.

use super::Word;
use std::collections::{BTreeMap, BTreeSet};

/// Scoring of a single guess against the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    matches: BTreeSet<usize>,
    close: BTreeMap<char, usize>,
}

/// Color of one guess tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Right letter, right position
    Match,
    /// Letter is in the target somewhere else
    Close,
    /// No credit left for this letter
    Wrong,
}

impl Tile {
    /// Emoji square for this tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Close => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

impl Score {
    /// Score where every position of a `length`-letter word matched
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self {
            matches: (0..length).collect(),
            close: BTreeMap::new(),
        }
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Identical words win outright: every position matches, nothing is close
    /// 2. Exact-match pass: positions where the guess letter equals the target
    ///    letter are recorded and that target slot is cleared
    /// 3. Closeness pass: every remaining target letter that appears anywhere in
    ///    the guess earns one credit for that letter
    ///
    /// Credits for a letter are bounded by the unmatched occurrences of that
    /// letter in the target, never by how often the guess repeats it.
    ///
    /// # Examples
    /// ```
    /// use plurdle::core::{Score, Word};
    ///
    /// let target = Word::new("speel").unwrap();
    /// let guess = Word::new("reset").unwrap();
    /// let score = Score::calculate(&guess, &target);
    ///
    /// assert_eq!(score.matches().iter().copied().collect::<Vec<_>>(), vec![3]);
    /// assert_eq!(score.close_count('e'), 1);
    /// assert_eq!(score.close_count('s'), 1);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        if guess == target {
            return Self::perfect(target.len());
        }

        // None marks a consumed slot; it never equals a letter
        let mut remaining: Vec<Option<u8>> = target.letters().iter().copied().map(Some).collect();
        let mut matches = BTreeSet::new();

        for (i, (&letter, slot)) in guess.letters().iter().zip(remaining.iter_mut()).enumerate() {
            if *slot == Some(letter) {
                matches.insert(i);
                *slot = None;
            }
        }

        let mut close = BTreeMap::new();
        for letter in remaining.into_iter().flatten() {
            if guess.has_letter(letter) {
                *close.entry(char::from(letter)).or_insert(0) += 1;
            }
        }

        Self { matches, close }
    }

    /// Positions that matched exactly
    #[must_use]
    pub const fn matches(&self) -> &BTreeSet<usize> {
        &self.matches
    }

    /// Closeness credits per letter
    #[must_use]
    pub const fn close(&self) -> &BTreeMap<char, usize> {
        &self.close
    }

    /// Credits for a single letter (0 when absent)
    #[must_use]
    pub fn close_count(&self, letter: char) -> usize {
        self.close.get(&letter).copied().unwrap_or(0)
    }

    /// Number of exact matches
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Sum of all closeness credits
    #[must_use]
    pub fn close_total(&self) -> usize {
        self.close.values().sum()
    }

    /// Color every tile of `guess`
    ///
    /// Matched positions are green. Other positions are yellow while the
    /// closeness map still holds credit for that letter, consuming one credit
    /// per tile from left to right; everything else is white.
    #[must_use]
    pub fn tiles(&self, guess: &Word) -> Vec<Tile> {
        let mut credits = self.close.clone();

        guess
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if self.matches.contains(&i) {
                    return Tile::Match;
                }
                match credits.get_mut(&char::from(letter)) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        Tile::Close
                    }
                    _ => Tile::Wrong,
                }
            })
            .collect()
    }
}

/// Render a row of tiles as emoji squares
#[must_use]
pub fn tiles_to_emoji(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.emoji()).collect()
}
