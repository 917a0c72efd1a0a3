//! Score a single guess against a chosen target

use crate::core::{Score, Tile, Word};
use crate::dictionary::Dictionary;
use anyhow::{Context, Result};

/// Result of checking one guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub score: Score,
    pub tiles: Vec<Tile>,
    /// Whether the game would accept this guess
    pub guess_is_valid: bool,
}

/// Score `guess` against `target` exactly as a game round would
///
/// The guess is scored even when it is not in the dictionary; the result
/// records whether a live round would have accepted it.
///
/// # Errors
///
/// Returns an error if either word is not a well-formed word of the
/// dictionary's length.
pub fn check_guess(target: &str, guess: &str, dictionary: &Dictionary) -> Result<CheckResult> {
    let length = dictionary.word_length();
    let target = Word::with_length(target, length).context("Invalid target word")?;
    let guess = Word::with_length(guess, length).context("Invalid guess")?;

    let score = Score::calculate(&guess, &target);
    let tiles = score.tiles(&guess);
    let guess_is_valid = dictionary.contains(&guess);

    Ok(CheckResult {
        target,
        guess,
        score,
        tiles,
        guess_is_valid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_scores_and_colors() {
        let dictionary = Dictionary::builtin().unwrap();
        let result = check_guess("pools", "SPOOL", &dictionary).unwrap();

        assert_eq!(result.guess.text(), "spool");
        assert_eq!(result.score.matches().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(result.tiles[2], Tile::Match);
        assert!(result.guess_is_valid);
    }

    #[test]
    fn check_flags_unknown_guess() {
        let dictionary = Dictionary::builtin().unwrap();
        let result = check_guess("speak", "fterk", &dictionary).unwrap();

        assert!(!result.guess_is_valid);
        assert_eq!(result.score.matches().iter().copied().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn check_rejects_malformed_words() {
        let dictionary = Dictionary::builtin().unwrap();
        assert!(check_guess("speak", "toolong", &dictionary).is_err());
        assert!(check_guess("sp3ak", "speak", &dictionary).is_err());
    }
}
