//! Divide-and-conquer grid construction with sub-block memoization
//!
//! Produces bit-identical grids to the iterative scan, but splits each block
//! into quadrants and caches completed blocks by their boundary threads and
//! origin orientation. The rules generate self-similar structure, so the
//! same sub-problems recur constantly at higher ranks and most quadrants are
//! served from the cache.
//!
//! The quadrants are not independent: the upper-right and lower-left blocks
//! are seeded from the upper-left block's edges, and the lower-right from
//! both of its neighbours. Getting the virtual boundaries or the orientation
//! parity wrong only shows up as seam artifacts at non-trivial ranks, which
//! is why the equivalence tests sweep every rule over several ranks.

use crate::io::error::{Result, computation_error};
use crate::weave::cache::{BlockKey, CacheStats, WeaveCache};
use crate::weave::grid::{Cell, WovenGrid};
use crate::weave::iterative::{materialize_boundary, scan_block};
use crate::weave::rules::{RuleKind, RuleTable};
use crate::weave::sequence::ThreadSequence;
use crate::weave::thread::{Crossing, Thread};
use ndarray::{Array2, s};
use std::rc::Rc;

/// Divide-and-conquer weave engine
///
/// Owns its memoized rule table and sub-block cache; both live exactly as
/// long as the weaver, so repeated runs and tests start cold.
#[derive(Debug)]
pub struct MemoizedWeaver {
    table: RuleTable,
    cache: WeaveCache,
}

impl MemoizedWeaver {
    /// Engine for one rule variant with an empty cache
    pub fn new(rule: RuleKind) -> Self {
        Self {
            table: RuleTable::new(rule),
            cache: WeaveCache::new(),
        }
    }

    /// The rule this engine weaves with
    pub const fn rule(&self) -> RuleKind {
        self.table.kind()
    }

    /// Hit and miss counters of the sub-block cache
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// Weave a full square grid
    ///
    /// Semantically equivalent to
    /// [`weave_iterative`](crate::weave::iterative::weave_iterative): equal
    /// inputs produce bit-identical grids.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero `size` or when a boundary thread falls
    /// outside the rule's colour domain.
    pub fn weave(
        &mut self,
        size: usize,
        mut top: ThreadSequence,
        mut side: ThreadSequence,
    ) -> Result<WovenGrid> {
        let top_threads = materialize_boundary(&mut top, size, "warp boundary")?;
        let side_threads = materialize_boundary(&mut side, size, "weft boundary")?;
        let block = self.weave_block(&top_threads, &side_threads, Crossing::Warp)?;
        Ok(WovenGrid::new((*block).clone()))
    }

    /// Weave one block, consulting the cache first
    fn weave_block(
        &mut self,
        top: &[Thread],
        side: &[Thread],
        origin: Crossing,
    ) -> Result<Rc<Array2<Cell>>> {
        let key = BlockKey::new(top, side, origin);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        // Strips of width or height one cannot be split at a midpoint;
        // scanning them directly is the recursion's base case.
        let block = if top.len() <= 1 || side.len() <= 1 {
            scan_block(&self.table, top, side, origin)?
        } else {
            self.weave_quadrants(top, side, origin)?
        };

        let block = Rc::new(block);
        self.cache.insert(key, Rc::clone(&block));
        Ok(block)
    }

    /// Split both axes at their midpoints and stitch four woven quadrants
    ///
    /// The upper-left quadrant sees only the outer boundaries. Its edges
    /// become virtual boundaries for the neighbours: the `right` threads of
    /// its last column seed the upper-right block, the `down` threads of its
    /// last row the lower-left block. The lower-right block is seeded
    /// symmetrically from the upper-right's bottom edge and the lower-left's
    /// right edge. Each sub-origin shifts parity by the offset of the
    /// quadrant's top-left corner.
    fn weave_quadrants(
        &mut self,
        top: &[Thread],
        side: &[Thread],
        origin: Crossing,
    ) -> Result<Array2<Cell>> {
        let width = top.len();
        let height = side.len();
        let xm = width / 2;
        let ym = height / 2;
        let (top_left, top_right) = top.split_at(xm);
        let (side_upper, side_lower) = side.split_at(ym);

        let ul = self.weave_block(top_left, side_upper, origin)?;
        let ur = self.weave_block(top_right, &last_column_rights(&ul), origin.shifted(xm))?;
        let ll = self.weave_block(&last_row_downs(&ul), side_lower, origin.shifted(ym))?;
        let lr = self.weave_block(
            &last_row_downs(&ur),
            &last_column_rights(&ll),
            origin.shifted(xm + ym),
        )?;

        if ul.dim() != (ym, xm)
            || ur.dim() != (ym, width - xm)
            || ll.dim() != (height - ym, xm)
            || lr.dim() != (height - ym, width - xm)
        {
            return Err(computation_error(
                "weave_quadrants",
                &"quadrant shape mismatch during stitching",
            ));
        }

        let mut cells = Array2::from_elem((height, width), Cell::default());
        cells.slice_mut(s![..ym, ..xm]).assign(ul.as_ref());
        cells.slice_mut(s![..ym, xm..]).assign(ur.as_ref());
        cells.slice_mut(s![ym.., ..xm]).assign(ll.as_ref());
        cells.slice_mut(s![ym.., xm..]).assign(lr.as_ref());
        Ok(cells)
    }
}

/// `right` threads of a block's last column, top to bottom
fn last_column_rights(block: &Array2<Cell>) -> Vec<Thread> {
    block
        .rows()
        .into_iter()
        .filter_map(|row| row.last().map(|cell| cell.right))
        .collect()
}

/// `down` threads of a block's last row, left to right
fn last_row_downs(block: &Array2<Cell>) -> Vec<Thread> {
    block
        .rows()
        .into_iter()
        .last()
        .map(|row| row.iter().map(|cell| cell.down).collect())
        .unwrap_or_default()
}
