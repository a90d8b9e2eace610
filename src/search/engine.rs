//! Word search queries
//!
//! Each query builds a fresh [`Walker`] and visitor, runs it, and drops both.
//! Board and dictionary are only borrowed.

use super::traversal::Walker;
use super::visitors::{FirstWord, LengthRule, LetterMatcher, WordCollector};
use crate::core::{Board, Path};
use crate::dictionary::PrefixOracle;
use rustc_hash::FxHashSet;

/// Shortest word reported by the open-length queries
pub const MIN_WORD_LENGTH: usize = 3;

fn collect_words<O: PrefixOracle + ?Sized>(
    board: &Board,
    dictionary: &O,
    rule: LengthRule,
) -> FxHashSet<String> {
    let mut collector = WordCollector::new(dictionary, rule);
    Walker::new(board).run(&mut collector);
    collector.into_words()
}

fn first_word<O: PrefixOracle + ?Sized>(
    board: &Board,
    dictionary: &O,
    rule: LengthRule,
) -> Option<String> {
    let mut finder = FirstWord::new(dictionary, rule);
    Walker::new(board).run(&mut finder);
    finder.into_word()
}

/// Convert a caller length to a usable target, rejecting `<= 0` and lengths
/// no simple path on `board` can reach
fn target_length(board: &Board, length: i64) -> Option<usize> {
    usize::try_from(length)
        .ok()
        .filter(|&len| len > 0 && len <= board.cell_count())
}

/// Count distinct dictionary words of at least [`MIN_WORD_LENGTH`] letters
///
/// A word reachable along several paths is counted once.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::dictionary::loader::dictionary_from_slice;
/// use boggle_solver::search::count_all_words;
///
/// let board = Board::from_rows(&["cat", "rxx", "xxx"]).unwrap();
/// let dict = dictionary_from_slice(&["cat", "car", "care"]);
/// assert_eq!(count_all_words(&board, &dict), 2);
/// ```
pub fn count_all_words<O: PrefixOracle + ?Sized>(board: &Board, dictionary: &O) -> usize {
    let count = collect_words(board, dictionary, LengthRule::AtLeast(MIN_WORD_LENGTH)).len();
    tracing::debug!(board_size = board.size(), count, "Counted all words");
    count
}

/// Every distinct word counted by [`count_all_words`], longest first then
/// alphabetical
pub fn find_all_words<O: PrefixOracle + ?Sized>(board: &Board, dictionary: &O) -> Vec<String> {
    let mut words: Vec<String> =
        collect_words(board, dictionary, LengthRule::AtLeast(MIN_WORD_LENGTH))
            .into_iter()
            .collect();
    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

/// Count distinct dictionary words of exactly `length` letters
///
/// Returns 0 for `length <= 0`.
pub fn count_words_of_length<O: PrefixOracle + ?Sized>(
    board: &Board,
    dictionary: &O,
    length: i64,
) -> usize {
    let Some(target) = target_length(board, length) else {
        return 0;
    };

    let count = collect_words(board, dictionary, LengthRule::Exactly(target)).len();
    tracing::debug!(length = target, count, "Counted words of length");
    count
}

/// True if `word` is a complete dictionary word, case-insensitively
pub fn word_exists_in_dictionary<O: PrefixOracle + ?Sized>(dictionary: &O, word: &str) -> bool {
    dictionary.query(&word.to_lowercase()).is_word()
}

/// True if `word` can be spelled along a simple path of adjacent tiles
///
/// No dictionary is consulted. The empty word is never on the board.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::search::word_exists_in_board;
///
/// let board = Board::from_rows(&["cat", "xxx", "xxx"]).unwrap();
/// assert!(word_exists_in_board(&board, "CAT"));
/// assert!(!word_exists_in_board(&board, "tact"));
/// ```
pub fn word_exists_in_board(board: &Board, word: &str) -> bool {
    locate_path(board, word).is_some()
}

/// First dictionary word of at least [`MIN_WORD_LENGTH`] letters in scan order
pub fn find_any_word<O: PrefixOracle + ?Sized>(board: &Board, dictionary: &O) -> Option<String> {
    let word = first_word(board, dictionary, LengthRule::AtLeast(MIN_WORD_LENGTH));
    tracing::debug!(?word, "Searched for any word");
    word
}

/// First dictionary word of exactly `length` letters in scan order
///
/// Returns `None` for `length <= 0`.
pub fn find_any_word_of_length<O: PrefixOracle + ?Sized>(
    board: &Board,
    dictionary: &O,
    length: i64,
) -> Option<String> {
    let target = target_length(board, length)?;
    let word = first_word(board, dictionary, LengthRule::Exactly(target));
    tracing::debug!(length = target, ?word, "Searched for any word of length");
    word
}

/// Tiles spelling `word` along the first matching simple path in scan order
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Tile};
/// use boggle_solver::search::locate_path;
///
/// let board = Board::from_rows(&["cat", "xxx", "xxx"]).unwrap();
/// assert_eq!(
///     locate_path(&board, "cat"),
///     Some(vec![Tile::new(0, 0), Tile::new(0, 1), Tile::new(0, 2)])
/// );
/// ```
pub fn locate_path(board: &Board, word: &str) -> Option<Path> {
    let mut matcher = LetterMatcher::new(word);
    let len = matcher.target_len();
    if len == 0 || len > board.cell_count() {
        return None;
    }

    Walker::new(board).run(&mut matcher);
    let path = matcher.into_path();
    tracing::debug!(word, found = path.is_some(), "Located word path");
    path
}
