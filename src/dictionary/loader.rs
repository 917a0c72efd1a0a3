//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words of `length` letters from a file, one per line
///
/// Blank lines and `#` comments are ignored. Entries that are not valid
/// words of the requested length are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use plurdle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            Word::with_length(line, length)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped invalid dictionary entries");
    }
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Convert an embedded string slice to words of `length` letters
///
/// # Examples
/// ```
/// use plurdle::dictionary::loader::words_from_slice;
/// use plurdle::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["speak", "steak", "reset"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "speak");
        assert_eq!(words[2].text(), "reset");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["speak", "toolong", "abc", "st3ak", "reset"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "speak");
        assert_eq!(words[1].text(), "reset");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }

    #[test]
    fn load_from_file_skips_blanks_comments_and_junk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# answers").unwrap();
        writeln!(file, "SPEAK").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  steak  ").unwrap();
        writeln!(file, "nope").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        assert_eq!(words, words_from_slice(&["speak", "steak"], 5));
    }

    #[test]
    fn load_from_file_respects_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plurdle\nspeak").unwrap();

        let words = load_from_file(file.path(), 7).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "plurdle");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }
}
