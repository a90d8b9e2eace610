//! Random board generation
//!
//! Every cell is drawn independently and uniformly from `a..=z`. There is no
//! letter-frequency weighting and no multi-letter dice faces.

use super::Board;
use rand::Rng;

/// Generate a random `size`×`size` board using the thread-local RNG
///
/// Returns `None` if `size <= 0`.
///
/// # Examples
/// ```
/// use boggle_solver::core::generate;
///
/// let board = generate(4).unwrap();
/// assert_eq!(board.cell_count(), 16);
///
/// assert!(generate(0).is_none());
/// assert!(generate(-3).is_none());
/// ```
#[must_use]
pub fn generate(size: i64) -> Option<Board> {
    generate_with_rng(size, &mut rand::rng())
}

/// Generate a random board from a caller-supplied RNG
///
/// Seeding the RNG makes generation reproducible.
pub fn generate_with_rng<R: Rng + ?Sized>(size: i64, rng: &mut R) -> Option<Board> {
    let size = usize::try_from(size).ok().filter(|&s| s > 0)?;
    let cells = size.checked_mul(size)?;

    let letters = (0..cells).map(|_| rng.random_range(b'a'..=b'z')).collect();
    Some(Board::from_raw(size, letters))
}
