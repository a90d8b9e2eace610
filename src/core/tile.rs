//! Grid coordinates and 8-directional adjacency

use std::fmt;
use std::str::FromStr;

/// Neighbour offsets in traversal order.
///
/// Row offset varies slowest, then column offset, each over -1, 0, +1 with
/// (0, 0) skipped. Searches that return the *first* match depend on this order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single (row, column) board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
}

/// Ordered sequence of tiles spelling a word
pub type Path = Vec<Tile>;

impl Tile {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two tiles
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// True when `other` is one of the 8 neighbours of `self`
    ///
    /// A tile is never adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Tile;
    ///
    /// assert!(Tile::new(1, 1).is_adjacent(Tile::new(0, 2)));
    /// assert!(!Tile::new(1, 1).is_adjacent(Tile::new(1, 1)));
    /// assert!(!Tile::new(0, 0).is_adjacent(Tile::new(2, 0)));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.distance(other) == 1
    }

    /// Shift by a signed offset, or `None` if a coordinate would go negative
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Tile {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Error type for tile text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileParseError {
    MissingSeparator(String),
    InvalidCoordinate(String),
}

impl fmt::Display for TileParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(text) => {
                write!(f, "Tile '{text}' must be written as row,col")
            }
            Self::InvalidCoordinate(text) => {
                write!(f, "Tile coordinate '{text}' is not a non-negative integer")
            }
        }
    }
}

impl std::error::Error for TileParseError {}

impl FromStr for Tile {
    type Err = TileParseError;

    /// Parse `"row,col"`, optionally wrapped in parentheses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| TileParseError::MissingSeparator(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| TileParseError::InvalidCoordinate(part.trim().to_string()))
        };

        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_exclude_origin_and_are_ordered() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        let mut sorted = NEIGHBOR_OFFSETS;
        sorted.sort_unstable();
        assert_eq!(sorted, NEIGHBOR_OFFSETS);
    }

    #[test]
    fn adjacency_covers_all_eight_directions() {
        let center = Tile::new(1, 1);
        let adjacent = (0..3)
            .flat_map(|row| (0..3).map(move |col| Tile::new(row, col)))
            .filter(|&t| center.is_adjacent(t))
            .count();
        assert_eq!(adjacent, 8);
    }

    #[test]
    fn distance_is_chebyshev() {
        assert_eq!(Tile::new(0, 0).distance(Tile::new(2, 1)), 2);
        assert_eq!(Tile::new(3, 3).distance(Tile::new(2, 2)), 1);
        assert_eq!(Tile::new(4, 0).distance(Tile::new(4, 0)), 0);
    }

    #[test]
    fn offset_rejects_negative_coordinates() {
        assert_eq!(Tile::new(0, 0).offset(-1, 0), None);
        assert_eq!(Tile::new(0, 0).offset(1, 1), Some(Tile::new(1, 1)));
        assert_eq!(Tile::new(2, 2).offset(-1, 1), Some(Tile::new(1, 3)));
    }

    #[test]
    fn parse_plain_and_parenthesized() {
        assert_eq!("1,2".parse::<Tile>(), Ok(Tile::new(1, 2)));
        assert_eq!(" (3, 0) ".parse::<Tile>(), Ok(Tile::new(3, 0)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            "12".parse::<Tile>(),
            Err(TileParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "-1,2".parse::<Tile>(),
            Err(TileParseError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            "a,b".parse::<Tile>(),
            Err(TileParseError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        let tile = Tile::new(4, 7);
        assert_eq!(tile.to_string(), "(4,7)");
        assert_eq!(tile.to_string().parse::<Tile>(), Ok(tile));
    }
}
