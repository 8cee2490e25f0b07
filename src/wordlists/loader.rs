//! Dictionary loading and pruning
//!
//! Loads whitespace-separated word tokens from files or embedded constants,
//! and prunes a loaded list down to one game length.

use crate::core::Word;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for an invalid prune request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneError {
    /// The requested word length was below 1
    InvalidLength(usize),
}

impl fmt::Display for PruneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word length must be at least 1, got {len}")
            }
        }
    }
}

impl std::error::Error for PruneError {}

/// Load words from a file
///
/// The file is treated as a sequence of whitespace-separated tokens; tokens
/// that are not valid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use absurdle::wordlists::loader::words_from_slice;
/// use absurdle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Prune a word list to exactly the words of the requested length
///
/// Duplicates collapse; the result is the initial candidate set for a game
/// of that length. The set may be empty if no word matches.
///
/// # Errors
/// Returns `PruneError::InvalidLength` if `length` is below 1.
pub fn prune_to_length(words: &[Word], length: usize) -> Result<BTreeSet<Word>, PruneError> {
    if length < 1 {
        return Err(PruneError::InvalidLength(length));
    }

    Ok(words
        .iter()
        .filter(|w| w.len() == length)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cr4ne", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn prune_keeps_only_requested_length() {
        let words = words_from_slice(&["cat", "crane", "dog", "slate", "machine"]);

        let pruned = prune_to_length(&words, 5).unwrap();
        assert_eq!(pruned.len(), 2);
        assert!(pruned.iter().all(|w| w.len() == 5));

        let pruned = prune_to_length(&words, 3).unwrap();
        assert_eq!(pruned.len(), 2);
    }

    #[test]
    fn prune_collapses_duplicates() {
        let words = words_from_slice(&["crane", "crane", "slate"]);
        let pruned = prune_to_length(&words, 5).unwrap();
        assert_eq!(pruned.len(), 2);
    }

    #[test]
    fn prune_zero_length_fails() {
        let words = words_from_slice(&["crane"]);
        assert_eq!(
            prune_to_length(&words, 0),
            Err(PruneError::InvalidLength(0))
        );
    }

    #[test]
    fn prune_no_matches_is_empty_not_error() {
        let words = words_from_slice(&["crane", "slate"]);
        let pruned = prune_to_length(&words, 9).unwrap();
        assert!(pruned.is_empty());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
