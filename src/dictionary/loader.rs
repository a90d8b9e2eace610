//! Dictionary loading utilities
//!
//! Provides functions to build a dictionary from a word file or from the
//! embedded word list.

use super::{DICTIONARY, TrieDictionary};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries containing anything other than letters are
/// skipped, since they can never be spelled on a board.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<TrieDictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dict = dictionary_from_lines(&content);

    tracing::info!(
        path = %path.display(),
        words = dict.len(),
        "Loaded dictionary"
    );
    Ok(dict)
}

/// Build a dictionary from newline-separated text
#[must_use]
pub fn dictionary_from_lines(content: &str) -> TrieDictionary {
    content
        .lines()
        .map(str::trim)
        .filter(|word| is_spellable(word))
        .collect()
}

/// Build a dictionary from a slice of words
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::loader::dictionary_from_slice;
/// use boggle_solver::dictionary::PrefixOracle;
///
/// let dict = dictionary_from_slice(&["cat", "car"]);
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains_word("cat"));
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> TrieDictionary {
    slice
        .iter()
        .map(|word| word.trim())
        .filter(|word| is_spellable(word))
        .collect()
}

/// Build the dictionary compiled into the binary
#[must_use]
pub fn embedded_dictionary() -> TrieDictionary {
    let dict = dictionary_from_slice(DICTIONARY);
    tracing::debug!(words = dict.len(), "Built embedded dictionary");
    dict
}

fn is_spellable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}
