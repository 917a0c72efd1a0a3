//! Opening-guess analysis
//!
//! Scores one guess against every answer to show how much it reveals on
//! average.

use crate::core::{Score, Word};
use crate::dictionary::Dictionary;
use anyhow::{Result, bail};
use rayon::prelude::*;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub total_answers: usize,
    pub average_matches: f64,
    pub average_close: f64,
    /// Answers sharing no letter at all with the guess
    pub blank_rows: usize,
    /// `match_distribution[k]` = answers giving exactly `k` exact matches
    pub match_distribution: Vec<usize>,
}

/// Score `word` against every answer in the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is malformed or has the wrong length
/// - The word is not an acceptable guess
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let length = dictionary.word_length();
    let guess = Word::with_length(word, length)?;

    if !dictionary.contains(&guess) {
        bail!("Word '{word}' not in word list");
    }

    let scores: Vec<(usize, usize)> = dictionary
        .answers()
        .par_iter()
        .map(|answer| {
            let score = Score::calculate(&guess, answer);
            (score.match_count(), score.close_total())
        })
        .collect();

    let total_answers = scores.len();
    let mut match_distribution = vec![0; length + 1];
    let mut total_matches = 0;
    let mut total_close = 0;
    let mut blank_rows = 0;

    for &(matches, close) in &scores {
        match_distribution[matches] += 1;
        total_matches += matches;
        total_close += close;
        if matches == 0 && close == 0 {
            blank_rows += 1;
        }
    }

    let average = |total: usize| {
        if total_answers == 0 {
            0.0
        } else {
            total as f64 / total_answers as f64
        }
    };

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_answers,
        average_matches: average(total_matches),
        average_close: average(total_close),
        blank_rows,
        match_distribution,
    })
}
