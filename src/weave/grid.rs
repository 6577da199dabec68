//! Woven cell and grid types plus rank arithmetic

use crate::io::error::{Result, invalid_parameter};
use crate::weave::thread::Thread;
use ndarray::Array2;

/// Branching factor of the canonical grids: side length is `3^rank + 1`
pub const GRID_BASE: usize = 3;

/// The four threads attached to one grid position's edges
///
/// `up` and `left` are always inherited unchanged from the neighbours above
/// and to the left (or from the boundary sequences on the first row and
/// column). A crossing rule chooses `down` and `right`, rewriting exactly
/// one of them per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Thread entering from above
    pub up: Thread,
    /// Thread entering from the left
    pub left: Thread,
    /// Thread leaving below
    pub down: Thread,
    /// Thread leaving to the right
    pub right: Thread,
}

impl Cell {
    /// Cell with every edge set to the same thread
    pub const fn uniform(thread: Thread) -> Self {
        Self {
            up: thread,
            left: thread,
            down: thread,
            right: thread,
        }
    }
}

impl Default for Cell {
    /// All-red cell, the fill value used before stitching
    fn default() -> Self {
        Self::uniform(Thread::Red)
    }
}

/// A fully woven square grid of cells
///
/// Produced in one pass by either weave construction and immutable
/// afterwards. Interior cells satisfy the adjacency invariant:
/// `cell(y, x).up == cell(y-1, x).down` and
/// `cell(y, x).left == cell(y, x-1).right`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WovenGrid {
    cells: Array2<Cell>,
}

impl WovenGrid {
    /// Wrap a populated cell array
    pub const fn new(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell at `(row, column)`, or `None` outside the grid
    pub fn get(&self, y: usize, x: usize) -> Option<Cell> {
        self.cells.get([y, x]).copied()
    }

    /// Backing cell array, addressed `[row, column]`
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

/// Side length of the canonical grid for a fractal rank: `3^rank + 1`
///
/// # Errors
///
/// Returns [`crate::io::error::WeaveError::InvalidParameter`] when the size
/// does not fit in a `usize`.
pub fn grid_size(rank: u32) -> Result<usize> {
    GRID_BASE
        .checked_pow(rank)
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| invalid_parameter("rank", &rank, &"grid size overflows usize"))
}
