//! Board word search
//!
//! Pruned depth-first queries over 8-connected simple paths, plus
//! validation of caller-supplied paths.

mod engine;
pub mod traversal;
mod validator;
mod visitors;

pub use engine::{
    MIN_WORD_LENGTH, count_all_words, count_words_of_length, find_all_words, find_any_word,
    find_any_word_of_length, locate_path, word_exists_in_board, word_exists_in_dictionary,
};
pub use validator::check_path;
