//! Core domain types for Boggle
//!
//! Boards, tiles and board generation. Nothing here knows about dictionaries.

mod board;
mod generator;
mod tile;

pub use board::{Board, BoardError};
pub use generator::{generate, generate_with_rng};
pub use tile::{NEIGHBOR_OFFSETS, Path, Tile, TileParseError};
