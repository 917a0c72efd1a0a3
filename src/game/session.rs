//! Game session
//!
//! Owns the current round and the random source used to draw targets. A
//! session belongs to one front-end at a time; every mutation goes through
//! `&mut self`.

use super::state::{GameState, GameStatus, GuessResult};
use super::{GameConfig, GameError};
use crate::core::Word;
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use tracing::{debug, warn};

/// A sequence of rounds played against one dictionary
pub struct GameSession<'a, R = ThreadRng> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    state: Option<GameState>,
    rng: R,
}

impl<'a> GameSession<'a, ThreadRng> {
    /// Create a session drawing targets with the thread-local RNG
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the config is unusable or does
    /// not match the dictionary's word length.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(dictionary, config, rand::rng())
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session with an explicit random source
    ///
    /// # Errors
    /// Same as [`GameSession::new`].
    pub fn with_rng(
        dictionary: &'a Dictionary,
        config: GameConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        config.check_dictionary(dictionary)?;

        Ok(Self {
            dictionary,
            config,
            state: None,
            rng,
        })
    }

    /// Start a new round with a freshly drawn target
    ///
    /// Targets are drawn uniformly from the answer list, redrawing until the
    /// word is a valid guess. After `max_draws` misses the draw falls back to
    /// a uniform pick among the playable answers.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if no answer can be drawn.
    pub fn initialize(&mut self) -> Result<(), GameError> {
        let target = self.draw_target()?.clone();
        self.state = Some(GameState::new(target));
        Ok(())
    }

    fn draw_target(&mut self) -> Result<&'a Word, GameError> {
        let dictionary = self.dictionary;
        let answers = dictionary.answers();

        for attempt in 1..=self.config.max_draws {
            let Some(candidate) = answers.choose(&mut self.rng) else {
                return Err(GameError::Configuration(
                    "answer list is empty".to_string(),
                ));
            };
            if dictionary.contains(candidate) {
                debug!(attempt, "drew target word");
                return Ok(candidate);
            }
            debug!(attempt, "drawn answer is not a valid guess, drawing again");
        }

        warn!(
            max_draws = self.config.max_draws,
            "draw limit reached, picking among playable answers"
        );
        dictionary
            .playable_answers()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| {
                GameError::Configuration("no answer word is a valid guess".to_string())
            })
    }

    /// Submit one guess for the current round
    ///
    /// # Errors
    /// - `GameError::GameOver` if no round is active
    /// - `GameError::InvalidLength` if the guess has the wrong number of letters
    /// - `GameError::InvalidGuess` if the guess is not in the dictionary
    pub fn submit_guess(&mut self, guess: &Word) -> GuessResult {
        let Some(state) = &self.state else {
            return Err(GameError::GameOver);
        };

        let (next, result) = state.apply_guess(guess, self.dictionary, &self.config);
        self.state = Some(next);
        result
    }

    /// Scored non-winning guesses in the current round
    #[must_use]
    pub fn tries(&self) -> usize {
        self.state.as_ref().map_or(0, GameState::tries)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_active)
    }

    /// Status of the current round, `None` before the first `initialize`
    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.state.as_ref().map(GameState::status)
    }

    /// The target, once the round is over
    ///
    /// This is the only way to read the target from outside the crate; the
    /// live round state stays private while guesses are being made.
    ///
    /// ```compile_fail
    /// use plurdle::dictionary::Dictionary;
    /// use plurdle::game::{GameConfig, GameSession};
    ///
    /// let dictionary = Dictionary::builtin().unwrap();
    /// let mut session = GameSession::new(&dictionary, GameConfig::default()).unwrap();
    /// session.initialize().unwrap();
    /// let _ = session.state().unwrap().target();
    /// ```
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.state
            .as_ref()
            .filter(|state| !state.is_active())
            .map(GameState::target)
    }

    #[cfg(test)]
    pub(crate) const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.config.max_tries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list, 5)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    const VALID: &[&str] = &[
        "speak", "steak", "speel", "reset", "oboes", "taboo", "pools", "spool", "crane",
    ];

    fn single_target(target: &str) -> Dictionary {
        Dictionary::new(words(&[target]), words(VALID)).unwrap()
    }

    fn session(dictionary: &Dictionary) -> GameSession<'_, StdRng> {
        GameSession::with_rng(dictionary, GameConfig::default(), StdRng::seed_from_u64(7))
            .unwrap()
    }

    #[test]
    fn no_round_before_initialize() {
        let dictionary = single_target("speak");
        let mut session = session(&dictionary);

        assert!(!session.is_active());
        assert_eq!(session.status(), None);
        assert_eq!(session.submit_guess(&word("speak")), Err(GameError::GameOver));
    }

    #[test]
    fn initialize_starts_active_round() {
        let dictionary = Dictionary::new(words(VALID), words(VALID)).unwrap();
        let mut session = session(&dictionary);

        session.initialize().unwrap();
        assert!(session.is_active());
        assert_eq!(session.tries(), 0);
        assert_eq!(session.status(), Some(GameStatus::Active));
        assert!(session.revealed_target().is_none());

        let target = session.state().unwrap().target();
        assert!(dictionary.contains(target));
    }

    #[test]
    fn draws_skip_answers_missing_from_valid_list() {
        let dictionary = Dictionary::new(
            words(&["zebra", "speak", "yacht", "zesty"]),
            words(VALID),
        )
        .unwrap();
        let mut session = session(&dictionary);

        for _ in 0..25 {
            session.initialize().unwrap();
            assert_eq!(session.state().unwrap().target().text(), "speak");
        }
    }

    #[test]
    fn draw_cap_falls_back_to_playable_answers() {
        let mut answers = words(&["zebra"; 50]);
        answers.push(word("taboo"));
        let dictionary = Dictionary::new(answers, words(VALID)).unwrap();
        let config = GameConfig {
            max_draws: 1,
            ..GameConfig::default()
        };
        let mut session =
            GameSession::with_rng(&dictionary, config, StdRng::seed_from_u64(1)).unwrap();

        for _ in 0..10 {
            session.initialize().unwrap();
            assert_eq!(session.state().unwrap().target().text(), "taboo");
        }
    }

    #[test]
    fn invalid_guess_keeps_state() {
        let dictionary = single_target("speak");
        let mut session = session(&dictionary);
        session.initialize().unwrap();

        let err = session.submit_guess(&word("fterk")).unwrap_err();
        assert_eq!(err.to_string(), "FTERK is not a valid word.");
        assert_eq!(session.tries(), 0);
        assert!(session.is_active());
    }

    #[test]
    fn target_hidden_until_round_ends() {
        let dictionary = single_target("speak");
        let mut session = session(&dictionary);
        session.initialize().unwrap();

        for guess in ["steak", "reset", "crane"] {
            assert!(session.is_active());
            assert_eq!(session.revealed_target(), None);
            session.submit_guess(&word(guess)).unwrap();
        }
        assert!(session.is_active());
        assert_eq!(session.revealed_target(), None);

        session.submit_guess(&word("speak")).unwrap();
        assert!(!session.is_active());
        assert_eq!(session.revealed_target(), Some(&word("speak")));

        // A new round hides the target again
        session.initialize().unwrap();
        assert_eq!(session.revealed_target(), None);
    }

    #[test]
    fn win_then_reveal_then_restart() {
        let dictionary = single_target("speak");
        let mut session = session(&dictionary);
        session.initialize().unwrap();

        session.submit_guess(&word("steak")).unwrap();
        let scored = session.submit_guess(&Word::new("SPEAK").unwrap()).unwrap();
        assert!(scored.win);
        assert_eq!(session.tries(), 1);
        assert_eq!(session.status(), Some(GameStatus::Won));
        assert_eq!(session.revealed_target(), Some(&word("speak")));

        session.initialize().unwrap();
        assert!(session.is_active());
        assert_eq!(session.tries(), 0);
    }

    #[test]
    fn loss_after_max_tries() {
        let dictionary = single_target("speak");
        let mut session = session(&dictionary);
        session.initialize().unwrap();

        for i in 1..=6 {
            let scored = session.submit_guess(&word("reset")).unwrap();
            assert!(!scored.win);
            assert_eq!(session.tries(), i);
        }

        assert_eq!(session.status(), Some(GameStatus::Lost));
        assert!(!session.is_active());
        assert_eq!(session.revealed_target(), Some(&word("speak")));
        assert_eq!(session.submit_guess(&word("speak")), Err(GameError::GameOver));
    }

    #[test]
    fn mismatched_word_length_rejected() {
        let dictionary = single_target("speak");
        let result = GameSession::new(&dictionary, GameConfig::new(6, 6));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn scenario_scores_through_session() {
        let dictionary = single_target("oboes");
        let mut session = session(&dictionary);
        session.initialize().unwrap();

        let scored = session.submit_guess(&word("taboo")).unwrap();
        assert!(scored.score.matches().is_empty());
        assert_eq!(scored.score.close_count('o'), 2);
        assert_eq!(session.tries(), 1);
    }
}
