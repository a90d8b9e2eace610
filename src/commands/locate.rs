//! Word location command
//!
//! Finds where a word sits on the board and, if a dictionary is loaded,
//! whether it is a valid word.

use crate::core::Path;
use crate::dictionary::PrefixOracle;
use crate::session::Session;

/// Result of locating a word
pub struct LocateResult {
    pub word: String,
    pub path: Option<Path>,
    /// `None` when no dictionary is loaded
    pub in_dictionary: Option<bool>,
}

/// Locate `word` on the session's board
///
/// # Errors
///
/// Returns an error if the session has no board or the word is empty.
pub fn locate_word<D: PrefixOracle>(
    session: &Session<D>,
    word: &str,
) -> Result<LocateResult, String> {
    if session.board().is_none() {
        return Err("Please generate a board first!".to_string());
    }

    let word = word.trim();
    if word.is_empty() {
        return Err("Please enter a word to check".to_string());
    }

    Ok(LocateResult {
        word: word.to_lowercase(),
        path: session.locate_path(word),
        in_dictionary: session
            .dictionary()
            .map(|_| session.word_exists_in_dictionary(word)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Tile};
    use crate::dictionary::loader::dictionary_from_slice;

    fn board() -> Board {
        Board::from_rows(&["cat", "xxx", "xxx"]).unwrap()
    }

    #[test]
    fn locate_found_word_with_dictionary() {
        let session = Session::new()
            .with_board(board())
            .with_dictionary(dictionary_from_slice(&["cat"]));

        let result = locate_word(&session, "  CAT ").unwrap();
        assert_eq!(result.word, "cat");
        assert_eq!(
            result.path,
            Some(vec![Tile::new(0, 0), Tile::new(0, 1), Tile::new(0, 2)])
        );
        assert_eq!(result.in_dictionary, Some(true));
    }

    #[test]
    fn locate_without_dictionary() {
        let session: Session = Session::new().with_board(board());
        let result = locate_word(&session, "tax").unwrap();
        assert!(result.path.is_some());
        assert_eq!(result.in_dictionary, None);
    }

    #[test]
    fn locate_missing_word() {
        let session: Session = Session::new().with_board(board());
        let result = locate_word(&session, "dog").unwrap();
        assert!(result.path.is_none());
    }

    #[test]
    fn locate_errors() {
        let empty: Session = Session::new();
        assert!(locate_word(&empty, "cat").is_err());

        let session: Session = Session::new().with_board(board());
        assert!(locate_word(&session, "   ").is_err());
    }
}
