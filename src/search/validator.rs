//! Caller-supplied path validation

use super::engine::MIN_WORD_LENGTH;
use crate::core::{Board, Tile};

/// Check that `tiles` spells `word` along adjacent board tiles
///
/// Rejects empty paths, words shorter than [`MIN_WORD_LENGTH`], paths whose
/// length differs from the word's, out-of-bounds tiles, letter mismatches
/// (case-insensitive), and consecutive tiles that are not 8-adjacent.
///
/// Tiles are *not* required to be distinct: a path that revisits a tile is
/// accepted if letters and adjacency line up. Paths produced by
/// [`locate_path`](super::locate_path) never revisit a tile.
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Tile};
/// use boggle_solver::search::check_path;
///
/// let board = Board::from_rows(&["cat", "xxx", "xxx"]).unwrap();
/// let path = [Tile::new(0, 0), Tile::new(0, 1), Tile::new(0, 2)];
/// assert!(check_path(&board, &path, "CAT"));
/// assert!(!check_path(&board, &path[..2], "ca"));
/// ```
#[must_use]
pub fn check_path(board: &Board, tiles: &[Tile], word: &str) -> bool {
    let letters: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();

    if tiles.is_empty() || letters.len() < MIN_WORD_LENGTH || tiles.len() != letters.len() {
        return false;
    }

    let letters_match = tiles
        .iter()
        .zip(&letters)
        .all(|(&tile, &letter)| board.letter(tile) == Some(letter));

    letters_match && tiles.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // C A T
        // R E X
        // X X S
        Board::from_rows(&["cat", "rex", "xxs"]).unwrap()
    }

    fn tiles(coords: &[(usize, usize)]) -> Vec<Tile> {
        coords.iter().copied().map(Tile::from).collect()
    }

    #[test]
    fn accepts_valid_path() {
        assert!(check_path(&board(), &tiles(&[(0, 0), (0, 1), (0, 2)]), "cat"));
        assert!(check_path(
            &board(),
            &tiles(&[(0, 0), (0, 1), (1, 0), (1, 1)]),
            "care"
        ));
    }

    #[test]
    fn letter_comparison_ignores_case() {
        assert!(check_path(&board(), &tiles(&[(0, 0), (0, 1), (0, 2)]), "CaT"));
    }

    #[test]
    fn rejects_empty_path() {
        assert!(!check_path(&board(), &[], "cat"));
    }

    #[test]
    fn rejects_short_words() {
        assert!(!check_path(&board(), &tiles(&[(0, 0), (0, 1)]), "ca"));
        assert!(!check_path(&board(), &tiles(&[(0, 0)]), "c"));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(!check_path(&board(), &tiles(&[(0, 0), (0, 1)]), "cat"));
        assert!(!check_path(
            &board(),
            &tiles(&[(0, 0), (0, 1), (0, 2), (1, 2)]),
            "cat"
        ));
    }

    #[test]
    fn rejects_wrong_letter() {
        assert!(!check_path(&board(), &tiles(&[(0, 0), (0, 1), (1, 2)]), "cat"));
    }

    #[test]
    fn rejects_non_adjacent_step() {
        // E (1,1) -> S (2,2) is adjacent, C (0,0) -> S (2,2) is not
        assert!(check_path(&board(), &tiles(&[(0, 1), (1, 1), (2, 2)]), "aes"));
        assert!(!check_path(&board(), &tiles(&[(0, 1), (0, 0), (2, 2)]), "acs"));
    }

    #[test]
    fn rejects_repeated_tile_step() {
        // Staying on the same tile has distance 0, which is not adjacency
        let b = Board::from_rows(&["aab", "xxx", "xxx"]).unwrap();
        assert!(!check_path(&b, &tiles(&[(0, 0), (0, 0), (0, 2)]), "aab"));
        assert!(check_path(&b, &tiles(&[(0, 0), (0, 1), (0, 2)]), "aab"));
    }

    #[test]
    fn rejects_out_of_bounds() {
        assert!(!check_path(&board(), &tiles(&[(0, 1), (0, 2), (0, 3)]), "atx"));
        assert!(!check_path(&board(), &tiles(&[(9, 9), (0, 0), (0, 1)]), "xca"));
    }

    #[test]
    fn accepts_revisited_tile() {
        // A -> T -> A reuses (0,1); the validator does not forbid it
        assert!(check_path(&board(), &tiles(&[(0, 1), (0, 2), (0, 1)]), "ata"));
    }
}
