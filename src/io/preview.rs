//! Plain-text preview of a woven grid
//!
//! One character per cell: a space where a pure red thread runs straight
//! through on either axis (red is the padding colour of the canonical
//! boundary sequences), a `+` anywhere the weave has structure. Useful for
//! eyeballing small ranks without opening an image.

use crate::weave::grid::WovenGrid;
use crate::weave::thread::Thread;

/// Render a grid as one line of characters per row
pub fn ascii_preview(grid: &WovenGrid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for row in grid.cells().rows() {
        for cell in row {
            let vertical_red = cell.up == Thread::Red && cell.down == Thread::Red;
            let horizontal_red = cell.left == Thread::Red && cell.right == Thread::Red;
            out.push(if vertical_red || horizontal_red { ' ' } else { '+' });
        }
        out.push('\n');
    }
    out
}
