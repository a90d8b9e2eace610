//! Board solving command
//!
//! Lists every dictionary word on the current board.

use crate::dictionary::PrefixOracle;
use crate::session::Session;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of solving a board
pub struct SolveResult {
    pub board_size: usize,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Word length → number of words of that length
    pub by_length: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.words.len()
    }
}

/// Find all words on the session's board
///
/// # Errors
///
/// Returns an error if the session has no board or no dictionary.
pub fn solve_board<D: PrefixOracle>(session: &Session<D>) -> Result<SolveResult, String> {
    let board = session
        .board()
        .ok_or("Please generate a board and load a dictionary first!")?;
    if session.dictionary().is_none() {
        return Err("Please generate a board and load a dictionary first!".to_string());
    }

    let start = Instant::now();
    let words = session.find_all_words();
    let duration = start.elapsed();

    let mut by_length = BTreeMap::new();
    for word in &words {
        *by_length.entry(word.len()).or_insert(0) += 1;
    }

    Ok(SolveResult {
        board_size: board.size(),
        words,
        by_length,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::loader::dictionary_from_slice;

    #[test]
    fn solve_lists_words_by_length() {
        let session = Session::new()
            .with_board(Board::from_rows(&["cat", "rxx", "exx"]).unwrap())
            .with_dictionary(dictionary_from_slice(&["cat", "car", "care", "zoo"]));

        let result = solve_board(&session).unwrap();
        assert_eq!(result.board_size, 3);
        assert_eq!(result.total(), 3);
        assert_eq!(result.words, vec!["care", "car", "cat"]);
        assert_eq!(result.by_length.get(&3), Some(&2));
        assert_eq!(result.by_length.get(&4), Some(&1));
    }

    #[test]
    fn solve_requires_board_and_dictionary() {
        let no_dict: Session =
            Session::new().with_board(Board::from_rows(&["ab", "cd"]).unwrap());
        assert!(solve_board(&no_dict).is_err());

        let no_board = Session::new().with_dictionary(dictionary_from_slice(&["cat"]));
        assert!(solve_board(&no_board).is_err());
    }

    #[test]
    fn length_distribution_sums_to_total() {
        let session = Session::new()
            .with_board("stoa/neat/lmrs/tone".parse().unwrap())
            .with_dictionary(crate::dictionary::loader::embedded_dictionary());

        let result = solve_board(&session).unwrap();
        let sum: usize = result.by_length.values().sum();
        assert_eq!(sum, result.total());
        assert!(result.total() > 0);
    }
}
