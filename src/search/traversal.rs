//! Shared depth-first traversal over simple board paths
//!
//! Every search mode walks the board the same way: start from each tile in
//! row-major order, extend to unvisited neighbours in [`NEIGHBOR_OFFSETS`]
//! order, never reuse a tile within a path. Modes differ only in what they
//! do at each entered tile, which a [`Visitor`] decides.
//!
//! [`NEIGHBOR_OFFSETS`]: crate::core::NEIGHBOR_OFFSETS

use crate::core::{Board, Tile};
use std::ops::ControlFlow;

/// What the traversal should do after entering a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep extending the current path
    Descend,
    /// Abandon this branch and backtrack
    Prune,
    /// Stop the whole traversal
    Halt,
}

/// Per-mode behaviour plugged into a [`Walker`]
pub trait Visitor {
    /// Called once per entered tile
    ///
    /// `prefix` is the lower-case string spelled so far and `path` the tiles
    /// that spell it; the entered tile is `path.last()`.
    fn visit(&mut self, prefix: &str, path: &[Tile]) -> Visit;
}

/// Backtracking walker owning the per-search working state
///
/// The visited marks, spelled prefix and path grow on entry to a tile and
/// shrink on exit, so they always describe exactly the current branch.
pub struct Walker<'b> {
    board: &'b Board,
    visited: Vec<bool>,
    prefix: String,
    path: Vec<Tile>,
}

impl<'b> Walker<'b> {
    #[must_use]
    pub fn new(board: &'b Board) -> Self {
        Self {
            board,
            visited: vec![false; board.cell_count()],
            prefix: String::new(),
            path: Vec::new(),
        }
    }

    /// Run `visitor` from every starting tile
    ///
    /// Returns `true` if the visitor halted the traversal.
    pub fn run<V: Visitor + ?Sized>(&mut self, visitor: &mut V) -> bool {
        let board = self.board;
        board
            .tiles()
            .try_for_each(|start| self.walk(start, visitor))
            .is_break()
    }

    fn walk<V: Visitor + ?Sized>(&mut self, tile: Tile, visitor: &mut V) -> ControlFlow<()> {
        let index = self.board.index(tile);
        self.visited[index] = true;
        self.prefix.push(self.board.letter_at(tile));
        self.path.push(tile);

        let flow = match visitor.visit(&self.prefix, &self.path) {
            Visit::Halt => ControlFlow::Break(()),
            Visit::Prune => ControlFlow::Continue(()),
            Visit::Descend => self.descend(tile, visitor),
        };

        self.path.pop();
        self.prefix.pop();
        self.visited[index] = false;
        flow
    }

    fn descend<V: Visitor + ?Sized>(&mut self, tile: Tile, visitor: &mut V) -> ControlFlow<()> {
        let board = self.board;
        for next in board.neighbors(tile) {
            if !self.visited[board.index(next)] {
                self.walk(next, visitor)?;
            }
        }
        ControlFlow::Continue(())
    }
}
