//! Errors surfaced by the game core

use thiserror::Error;

/// Everything that can go wrong in a game session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess is not an acceptable word. Carries the rejected text
    #[error("{} is not a valid word.", .0.to_uppercase())]
    InvalidGuess(String),

    /// The guess does not have the configured number of letters
    #[error("Guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A guess was submitted while no round is running
    #[error("The game is over. Start a new round to keep playing.")]
    GameOver,

    /// Unusable dictionary or configuration; fatal for the session
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GameError {
    /// True for errors the player can fix by typing another guess
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGuess(_) | Self::InvalidLength { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_guess_message_is_upper_case() {
        let err = GameError::InvalidGuess("fterk".to_string());
        assert_eq!(err.to_string(), "FTERK is not a valid word.");
    }

    #[test]
    fn recoverable_kinds() {
        assert!(GameError::InvalidGuess("fterk".into()).is_recoverable());
        assert!(
            GameError::InvalidLength {
                expected: 5,
                actual: 4
            }
            .is_recoverable()
        );
        assert!(!GameError::GameOver.is_recoverable());
        assert!(!GameError::Configuration("empty".into()).is_recoverable());
    }
}
