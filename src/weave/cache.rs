//! Memoization cache for woven sub-blocks
//!
//! The divide-and-conquer weave revisits identical sub-problems constantly
//! because the rules generate self-similar structure. A block is fully
//! determined by its two boundary slices and the orientation at its origin
//! (the rule is fixed per engine), so completed blocks are cached under that
//! key and shared by reference counting.

use crate::weave::grid::Cell;
use crate::weave::thread::{Crossing, Thread};
use ndarray::Array2;
use std::collections::HashMap;
use std::rc::Rc;

/// Identity of a woven sub-block
///
/// `top` seeds the `up` threads of the block's first row, `side` the `left`
/// threads of its first column; `origin` is the orientation at the block's
/// top-left position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockKey {
    /// Upper boundary threads, one per column
    pub top: Vec<Thread>,
    /// Left boundary threads, one per row
    pub side: Vec<Thread>,
    /// Orientation at the block origin
    pub origin: Crossing,
}

impl BlockKey {
    /// Key for a block woven from the given boundaries and origin
    pub fn new(top: &[Thread], side: &[Thread], origin: Crossing) -> Self {
        Self {
            top: top.to_vec(),
            side: side.to_vec(),
            origin,
        }
    }
}

/// Hit and miss counters for cache effectiveness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of blocks served from the cache
    pub hits: usize,
    /// Number of blocks that had to be woven
    pub misses: usize,
}

/// Sub-block cache owned by one divide-and-conquer weaver
///
/// Single-threaded by design: duplicate computation would be harmless (the
/// rules are pure) but the engine never shares a cache across threads.
#[derive(Debug, Default)]
pub struct WeaveCache {
    blocks: HashMap<BlockKey, Rc<Array2<Cell>>>,
    /// Cache performance statistics
    pub stats: CacheStats,
}

impl WeaveCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached block for a key, counting a hit when present
    pub fn get(&mut self, key: &BlockKey) -> Option<Rc<Array2<Cell>>> {
        let found = self.blocks.get(key).cloned();
        match found {
            Some(_) => self.stats.hits += 1,
            None => self.stats.misses += 1,
        }
        found
    }

    /// Store a freshly woven block
    pub fn insert(&mut self, key: BlockKey, block: Rc<Array2<Cell>>) {
        self.blocks.insert(key, block);
    }

    /// Number of distinct blocks currently cached
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the cache holds no blocks yet
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
