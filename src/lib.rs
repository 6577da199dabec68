//! Deterministic woven-grid pattern generation
//!
//! Four-colour state propagates across rows and columns of a square grid
//! according to small local crossing rules, producing self-similar
//! Sierpinski-like textures that are rasterized into PNG images. Two
//! equivalent constructions are provided: a row-major reference scan and a
//! divide-and-conquer variant that memoizes recurring sub-grids.

#![deny(unsafe_code)]

/// Input/output operations, rendering and error handling
pub mod io;
/// The weave engine: threads, rules, sequences and grid recurrences
pub mod weave;

pub use io::error::{Result, WeaveError};
pub use weave::{
    Cell, Crossing, MemoizedWeaver, RuleKind, Thread, ThreadSequence, WovenGrid, grid_size,
    sequence_by_name, weave_iterative,
};
