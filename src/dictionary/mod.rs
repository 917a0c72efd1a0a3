//! Dictionary provider
//!
//! Holds the ordered list of candidate targets and the set of acceptable
//! guesses. Both are loaded once and never change afterwards.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VALID, VALID_COUNT};

use crate::core::{WORD_LENGTH, Word};
use crate::game::GameError;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Answer list plus valid-guess set
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    valid: FxHashSet<Word>,
    word_length: usize,
}

/// Consistency report for a dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryReport {
    pub answer_count: usize,
    pub valid_count: usize,
    /// Answers that are also valid guesses (the drawable targets)
    pub playable: usize,
    /// Answers missing from the valid set, in answer order
    pub missing: Vec<Word>,
    /// Answers listed more than once, sorted
    pub duplicates: Vec<Word>,
}

impl DictionaryReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty()
    }
}

impl Dictionary {
    /// Build a dictionary from an answer list and a valid-guess list
    ///
    /// Answers that are not valid guesses are kept; the session skips them
    /// when drawing. At least one answer must be playable.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the answer list is empty, the
    /// answers have mixed lengths, or no answer is a valid guess.
    pub fn new(
        answers: Vec<Word>,
        valid: impl IntoIterator<Item = Word>,
    ) -> Result<Self, GameError> {
        let Some(first) = answers.first() else {
            return Err(GameError::Configuration(
                "answer list is empty".to_string(),
            ));
        };
        let word_length = first.len();

        if let Some(odd) = answers.iter().find(|w| w.len() != word_length) {
            return Err(GameError::Configuration(format!(
                "answer '{odd}' is not {word_length} letters"
            )));
        }

        let valid: FxHashSet<Word> = valid.into_iter().collect();

        if !answers.iter().any(|w| valid.contains(w)) {
            return Err(GameError::Configuration(
                "no answer word is in the valid word list".to_string(),
            ));
        }

        Ok(Self {
            answers,
            valid,
            word_length,
        })
    }

    /// Dictionary built from the word lists embedded at compile time
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the embedded lists are unusable.
    pub fn builtin() -> Result<Self, GameError> {
        Self::new(
            loader::words_from_slice(ANSWERS, WORD_LENGTH),
            loader::words_from_slice(VALID, WORD_LENGTH),
        )
    }

    /// Candidate targets in list order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Membership test for guesses
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Letters per word in this dictionary
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Answers that are also valid guesses, in list order
    #[must_use]
    pub fn playable_answers(&self) -> Vec<&Word> {
        self.answers.iter().filter(|w| self.contains(w)).collect()
    }

    /// Check the answer list against the valid set
    #[must_use]
    pub fn audit(&self) -> DictionaryReport {
        self.audit_with(|| {})
    }

    /// Same as [`Dictionary::audit`], calling `on_checked` once per answer
    pub fn audit_with<F>(&self, on_checked: F) -> DictionaryReport
    where
        F: Fn() + Sync,
    {
        let missing: Vec<Word> = self
            .answers
            .par_iter()
            .filter(|word| {
                on_checked();
                !self.contains(word)
            })
            .cloned()
            .collect();

        let mut counts: FxHashMap<&Word, usize> = FxHashMap::default();
        for word in &self.answers {
            *counts.entry(word).or_insert(0) += 1;
        }
        let mut duplicates: Vec<Word> = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(word, _)| word.clone())
            .collect();
        duplicates.sort();

        DictionaryReport {
            answer_count: self.answers.len(),
            valid_count: self.valid.len(),
            playable: self.answers.len() - missing.len(),
            missing,
            duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::loader::words_from_slice;
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list, 5)
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(VALID.len(), VALID_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_five_letters() {
        for &word in ANSWERS.iter().chain(VALID) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_dictionary_is_consistent() {
        let dictionary = Dictionary::builtin().unwrap();
        let report = dictionary.audit();

        assert!(report.is_consistent(), "{report:?}");
        assert_eq!(report.playable, ANSWERS_COUNT);
        assert_eq!(dictionary.word_length(), 5);
    }

    #[test]
    fn builtin_dictionary_accepts_scoring_words() {
        let dictionary = Dictionary::builtin().unwrap();
        for word in ["speak", "steak", "speel", "reset", "oboes", "taboo", "pools", "spool"] {
            assert!(dictionary.contains(&Word::new(word).unwrap()), "{word}");
        }
        assert!(!dictionary.contains(&Word::new("fterk").unwrap()));
    }

    #[test]
    fn empty_answers_rejected() {
        let result = Dictionary::new(Vec::new(), words(&["speak"]));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn no_overlap_rejected() {
        let result = Dictionary::new(words(&["speak"]), words(&["steak"]));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let mut answers = words(&["speak"]);
        answers.push(Word::with_length("plurdle", 7).unwrap());
        let result = Dictionary::new(answers, words(&["speak"]));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn audit_reports_missing_and_duplicates() {
        let dictionary = Dictionary::new(
            words(&["speak", "steak", "speak", "zebra"]),
            words(&["speak", "steak"]),
        )
        .unwrap();

        let report = dictionary.audit();
        assert_eq!(report.answer_count, 4);
        assert_eq!(report.valid_count, 2);
        assert_eq!(report.playable, 3);
        assert_eq!(report.missing, words(&["zebra"]));
        assert_eq!(report.duplicates, words(&["speak"]));
        assert!(!report.is_consistent());
    }

    #[test]
    fn playable_answers_keep_order() {
        let dictionary =
            Dictionary::new(words(&["zebra", "steak", "speak"]), words(&["speak", "steak"]))
                .unwrap();
        let playable: Vec<&str> = dictionary
            .playable_answers()
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(playable, vec!["steak", "speak"]);
    }

    #[test]
    fn audit_with_counts_every_answer() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let dictionary = Dictionary::builtin().unwrap();
        let checked = AtomicUsize::new(0);
        let _ = dictionary.audit_with(|| {
            checked.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(checked.into_inner(), dictionary.answers().len());
    }
}
