//! Row-major iterative grid construction
//!
//! The reference weave: a single scan where every cell takes its `up` thread
//! from the row above, its `left` thread from the cell before it, and the
//! boundary sequences along the first row and column. The inner block scan
//! is shared with the divide-and-conquer engine, which uses it as the base
//! case over virtual boundaries.

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::weave::grid::{Cell, WovenGrid};
use crate::weave::rules::{RuleKind, RuleTable};
use crate::weave::sequence::ThreadSequence;
use crate::weave::thread::{Crossing, Thread};
use ndarray::Array2;

/// Draw `size` threads from a boundary sequence
///
/// # Errors
///
/// Returns [`crate::io::error::WeaveError::InvalidParameter`] for a zero
/// size or a sequence that stops producing values early.
pub fn materialize_boundary(
    seq: &mut ThreadSequence,
    size: usize,
    parameter: &'static str,
) -> Result<Vec<Thread>> {
    if size == 0 {
        return Err(invalid_parameter(
            parameter,
            &size,
            &"grid size must be positive",
        ));
    }
    let threads: Vec<Thread> = seq.by_ref().take(size).collect();
    if threads.len() < size {
        return Err(invalid_parameter(
            parameter,
            &threads.len(),
            &"boundary sequence exhausted before the grid edge",
        ));
    }
    Ok(threads)
}

/// Weave one rectangular block from materialized boundaries
///
/// `top` seeds the `up` threads of the first row (one per column), `side`
/// the `left` threads of the first column (one per row); `origin` is the
/// orientation at the block's top-left position. Interior cells chain off
/// the `down` and `right` threads of their neighbours, which establishes the
/// adjacency invariant by construction.
///
/// # Errors
///
/// Returns [`crate::io::error::WeaveError::RuleDomain`] when a boundary
/// thread falls outside the rule's colour domain.
pub fn scan_block(
    table: &RuleTable,
    top: &[Thread],
    side: &[Thread],
    origin: Crossing,
) -> Result<Array2<Cell>> {
    let width = top.len();
    let height = side.len();
    let mut cells = Vec::with_capacity(width * height);

    // `down` threads of the row above; the top boundary plays that role
    // for the first row.
    let mut prev_down = top.to_vec();
    for (y, &edge) in side.iter().enumerate() {
        let mut carry = edge;
        let mut next_down = Vec::with_capacity(width);
        for (x, &up) in prev_down.iter().enumerate() {
            let cell = table.cell(up, carry, origin.shifted(x + y))?;
            carry = cell.right;
            next_down.push(cell.down);
            cells.push(cell);
        }
        prev_down = next_down;
    }

    Array2::from_shape_vec((height, width), cells)
        .map_err(|e| computation_error("scan_block", &e))
}

/// Weave a full square grid with the row-major reference construction
///
/// Deterministic, O(size squared) in time and space.
///
/// # Errors
///
/// Returns an error for a zero `size` or when a boundary thread falls
/// outside the rule's colour domain.
pub fn weave_iterative(
    rule: RuleKind,
    size: usize,
    mut top: ThreadSequence,
    mut side: ThreadSequence,
) -> Result<WovenGrid> {
    let table = RuleTable::new(rule);
    let top_threads = materialize_boundary(&mut top, size, "warp boundary")?;
    let side_threads = materialize_boundary(&mut side, size, "weft boundary")?;
    scan_block(&table, &top_threads, &side_threads, Crossing::Warp).map(WovenGrid::new)
}
