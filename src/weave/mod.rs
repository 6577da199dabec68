//! The weave engine: colour alphabet, crossing rules, and grid recurrences
//!
//! This module contains the algorithmic core: the thread alphabet, the
//! boundary sequence state machines, the memoized crossing rules, and the
//! two equivalent grid constructions (row-major iterative and
//! divide-and-conquer with sub-block memoization).

/// Sub-block memoization cache for the divide-and-conquer weave
pub mod cache;
/// Cell and grid types plus rank arithmetic
pub mod grid;
/// Row-major iterative grid construction
pub mod iterative;
/// Divide-and-conquer grid construction with memoization
pub mod recursive;
/// Crossing rule variants and their memoized lookup table
pub mod rules;
/// Boundary thread sequences and their named registry
pub mod sequence;
/// Thread alphabet and crossing orientation
pub mod thread;

pub use grid::{Cell, WovenGrid, grid_size};
pub use iterative::weave_iterative;
pub use recursive::MemoizedWeaver;
pub use rules::RuleKind;
pub use sequence::{ThreadSequence, sequence_by_name};
pub use thread::{Crossing, Thread};
