//! Round state and its transition function
//!
//! `GameState::apply_guess` is pure: it takes the current state and a guess
//! and returns the next state together with the result for the caller.

use super::{GameConfig, GameError};
use crate::core::{Score, Word};
use crate::dictionary::Dictionary;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// A guess that was accepted and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub guess: Word,
    pub score: Score,
    pub win: bool,
}

/// Outcome of one submission
pub type GuessResult = Result<Scored, GameError>;

/// One round: the hidden target, tries used so far and the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    tries: usize,
    status: GameStatus,
}

impl GameState {
    /// Fresh active round for `target`
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            tries: 0,
            status: GameStatus::Active,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Scored non-winning guesses so far
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Apply one guess
    ///
    /// Checks run in order: round still active, guess length, dictionary
    /// membership, exact win. Any error leaves the state untouched. A winning
    /// guess ends the round without using a try; any other scored guess uses
    /// one and loses the round once `max_tries` is reached.
    #[must_use]
    pub fn apply_guess(
        &self,
        guess: &Word,
        dictionary: &Dictionary,
        config: &GameConfig,
    ) -> (Self, GuessResult) {
        if !self.is_active() {
            return (self.clone(), Err(GameError::GameOver));
        }

        if guess.len() != self.target.len() {
            return (
                self.clone(),
                Err(GameError::InvalidLength {
                    expected: self.target.len(),
                    actual: guess.len(),
                }),
            );
        }

        if !dictionary.contains(guess) {
            return (
                self.clone(),
                Err(GameError::InvalidGuess(guess.text().to_string())),
            );
        }

        if *guess == self.target {
            let next = Self {
                status: GameStatus::Won,
                ..self.clone()
            };
            let scored = Scored {
                guess: guess.clone(),
                score: Score::perfect(guess.len()),
                win: true,
            };
            return (next, Ok(scored));
        }

        let score = Score::calculate(guess, &self.target);
        let tries = self.tries + 1;
        let status = if tries >= config.max_tries {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };

        let next = Self {
            target: self.target.clone(),
            tries,
            status,
        };
        let scored = Scored {
            guess: guess.clone(),
            score,
            win: false,
        };
        (next, Ok(scored))
    }
}
