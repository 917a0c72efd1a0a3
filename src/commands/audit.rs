//! Dictionary audit
//!
//! Checks that every answer can be drawn as a target.

use crate::dictionary::{Dictionary, DictionaryReport};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Audit the dictionary, showing a progress bar while answers are checked
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_audit(dictionary: &Dictionary) -> DictionaryReport {
    let pb = ProgressBar::new(dictionary.answers().len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("checking answers");

    let report = dictionary.audit_with(|| pb.inc(1));

    pb.finish_with_message("Complete!");
    info!(
        answers = report.answer_count,
        playable = report.playable,
        missing = report.missing.len(),
        duplicates = report.duplicates.len(),
        "dictionary audit finished"
    );

    report
}
