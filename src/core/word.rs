//! Word representation
//!
//! A Word is a fixed-length sequence of lowercase ASCII letters. The length is
//! part of the game configuration and defaults to five.

use std::fmt;
use thiserror::Error;

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// A word made of lowercase ASCII letters
///
/// Equality and hashing use the normalized text, so `Word::new("CRANE")`
/// equals `Word::new("crane")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of the default length
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use plurdle::core::Word;
    ///
    /// let word = Word::new("Speak").unwrap();
    /// assert_eq!(word.text(), "speak");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Same conditions as [`Word::new`], checked against `length`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word unless it was built with length 0
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Upper-case form used in player-facing messages
    #[must_use]
    pub fn shout(&self) -> String {
        self.text.to_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("speak").unwrap();
        assert_eq!(word.text(), "speak");
        assert_eq!(word.letters(), b"speak");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SPEAK").unwrap();
        assert_eq!(word.text(), "speak");

        let word2 = Word::new("SpEaK").unwrap();
        assert_eq!(word2.text(), "speak");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength { actual: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_custom_length() {
        let word = Word::with_length("plurdle", 7).unwrap();
        assert_eq!(word.len(), 7);
        assert!(Word::with_length("speak", 7).is_err());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("spea3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("spea "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("spea!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("speäk"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speel").unwrap();
        assert_eq!(word.letters()[4], b'l');
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_display_and_shout() {
        let word = Word::new("speak").unwrap();
        assert_eq!(format!("{word}"), "speak");
        assert_eq!(word.shout(), "SPEAK");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("speak").unwrap();
        let word2: Word = "SPEAK".parse().unwrap();
        let word3 = Word::new("steak").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
