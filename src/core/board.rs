//! Square letter grid
//!
//! A Board stores N×N lower-case ASCII letters in row-major order. It is
//! immutable once built; searches borrow it and never write to it.

use super::tile::{NEIGHBOR_OFFSETS, Tile};
use std::fmt;
use std::str::FromStr;

/// N×N grid of letters, N > 0
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    letters: Vec<u8>,
}

/// Error type for invalid board text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidLetter {
        tile: Tile,
        letter: char,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must have at least one row"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "Board must be square: row {row} has {found} letters, expected {expected}"
            ),
            Self::InvalidLetter { tile, letter } => {
                write!(f, "Board tile {tile} holds '{letter}', expected a letter a-z")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Build from pre-validated lower-case letters
    pub(crate) fn from_raw(size: usize, letters: Vec<u8>) -> Self {
        debug_assert!(size > 0, "Board size must be positive");
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    /// Build a board from one string per row
    ///
    /// Letters are normalized to lower case.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - No rows are given
    /// - Any row length differs from the number of rows
    /// - Any cell is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Tile};
    ///
    /// let board = Board::from_rows(&["CAT", "xyz", "QRS"]).unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.letter(Tile::new(0, 1)), Some('a'));
    ///
    /// assert!(Board::from_rows(&["ab", "c"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut letters = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != size {
                return Err(BoardError::NotSquare {
                    row,
                    expected: size,
                    found,
                });
            }

            for (col, letter) in text.chars().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(BoardError::InvalidLetter {
                        tile: Tile::new(row, col),
                        letter,
                    });
                }
                letters.push(letter.to_ascii_lowercase() as u8);
            }
        }

        Ok(Self::from_raw(size, letters))
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, tile: Tile) -> bool {
        tile.row < self.size && tile.col < self.size
    }

    /// Row-major index of an in-bounds tile
    #[inline]
    pub(crate) const fn index(&self, tile: Tile) -> usize {
        tile.row * self.size + tile.col
    }

    /// Lower-case letter at `tile`, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, tile: Tile) -> Option<char> {
        self.contains(tile)
            .then(|| char::from(self.letters[self.index(tile)]))
    }

    /// Letter at an in-bounds tile
    ///
    /// # Panics
    /// Panics if `tile` is outside the board.
    #[inline]
    pub(crate) fn letter_at(&self, tile: Tile) -> char {
        char::from(self.letters[self.index(tile)])
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Tile::new(row, col)))
    }

    /// In-bounds neighbours of `tile` in traversal order
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Tile};
    ///
    /// let board = Board::from_rows(&["abc", "def", "ghi"]).unwrap();
    /// let corner: Vec<Tile> = board.neighbors(Tile::new(0, 0)).collect();
    /// assert_eq!(corner, vec![Tile::new(0, 1), Tile::new(1, 0), Tile::new(1, 1)]);
    /// ```
    pub fn neighbors(&self, tile: Tile) -> impl Iterator<Item = Tile> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| tile.offset(d_row, d_col))
            .filter(|&next| self.contains(next))
    }

    /// Letters of each row, lower case
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.letters.chunks(self.size)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rows separated by `/`, commas or whitespace, e.g. `"cat/xxx/xxx"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    /// Upper-case letters separated by spaces, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", char::from(letter.to_ascii_uppercase()))?;
            }
        }
        Ok(())
    }
}
