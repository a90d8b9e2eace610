//! Board and dictionary held between queries
//!
//! A `Session` is the explicit context a front end threads through its
//! commands. Either half may be missing; queries that need a missing half
//! fail closed with 0, `false` or `None` instead of erroring.

use crate::core::{Board, Path, Tile, generate};
use crate::dictionary::{PrefixOracle, TrieDictionary};
use crate::search;

/// Current board and dictionary
#[derive(Debug, Clone)]
pub struct Session<D = TrieDictionary> {
    board: Option<Board>,
    dictionary: Option<D>,
}

impl<D> Default for Session<D> {
    fn default() -> Self {
        Self {
            board: None,
            dictionary: None,
        }
    }
}

impl<D: PrefixOracle> Session<D> {
    /// Session with neither board nor dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: D) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn dictionary(&self) -> Option<&D> {
        self.dictionary.as_ref()
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    pub fn set_dictionary(&mut self, dictionary: D) {
        self.dictionary = Some(dictionary);
    }

    /// Replace the board with a fresh random one
    ///
    /// An invalid size clears the board. Returns whether a board is now held.
    pub fn generate_board(&mut self, size: i64) -> bool {
        self.board = generate(size);
        if self.board.is_none() {
            tracing::warn!(size, "Invalid board size, board cleared");
        }
        self.board.is_some()
    }

    fn both(&self) -> Option<(&Board, &D)> {
        self.board.as_ref().zip(self.dictionary.as_ref())
    }

    pub fn count_all_words(&self) -> usize {
        self.both()
            .map_or(0, |(board, dict)| search::count_all_words(board, dict))
    }

    pub fn find_all_words(&self) -> Vec<String> {
        self.both()
            .map(|(board, dict)| search::find_all_words(board, dict))
            .unwrap_or_default()
    }

    pub fn count_words_of_length(&self, length: i64) -> usize {
        self.both().map_or(0, |(board, dict)| {
            search::count_words_of_length(board, dict, length)
        })
    }

    pub fn word_exists_in_dictionary(&self, word: &str) -> bool {
        self.dictionary
            .as_ref()
            .is_some_and(|dict| search::word_exists_in_dictionary(dict, word))
    }

    pub fn word_exists_in_board(&self, word: &str) -> bool {
        self.board
            .as_ref()
            .is_some_and(|board| search::word_exists_in_board(board, word))
    }

    pub fn find_any_word(&self) -> Option<String> {
        self.both()
            .and_then(|(board, dict)| search::find_any_word(board, dict))
    }

    pub fn find_any_word_of_length(&self, length: i64) -> Option<String> {
        self.both()
            .and_then(|(board, dict)| search::find_any_word_of_length(board, dict, length))
    }

    pub fn locate_path(&self, word: &str) -> Option<Path> {
        self.board
            .as_ref()
            .and_then(|board| search::locate_path(board, word))
    }

    pub fn check_path(&self, tiles: &[Tile], word: &str) -> bool {
        self.board
            .as_ref()
            .is_some_and(|board| search::check_path(board, tiles, word))
    }
}
