//! Game configuration

use super::GameError;
use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;

/// Default number of guesses per round
pub const MAX_TRIES: usize = 6;

/// Default cap on target draws before falling back to the playable answers
pub const MAX_DRAWS: usize = 1000;

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Non-winning guesses allowed before the round is lost
    pub max_tries: usize,
    /// Rejection-sampling attempts when drawing a target
    pub max_draws: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_tries: MAX_TRIES,
            max_draws: MAX_DRAWS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(word_length: usize, max_tries: usize) -> Self {
        Self {
            word_length,
            max_tries,
            ..Self::default()
        }
    }

    /// Check that every limit is usable
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if any limit is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::Configuration(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_tries == 0 {
            return Err(GameError::Configuration(
                "max tries must be at least 1".to_string(),
            ));
        }
        if self.max_draws == 0 {
            return Err(GameError::Configuration(
                "max draws must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that the dictionary's words have the configured length
    ///
    /// # Errors
    /// Returns `GameError::Configuration` on a length mismatch.
    pub fn check_dictionary(&self, dictionary: &Dictionary) -> Result<(), GameError> {
        if dictionary.word_length() == self.word_length {
            return Ok(());
        }
        Err(GameError::Configuration(format!(
            "dictionary has {}-letter words but the game expects {}",
            dictionary.word_length(),
            self.word_length
        )))
    }
}
