//! Boundary thread sequences seeding the grid's first row and column
//!
//! A sequence is an explicit little state machine rather than an anonymous
//! generator: it can be cloned for an independent cursor, reset to its first
//! value, and polled forever. The named registry reproduces the original
//! pattern library (one-shot green-then-red plus the six rotations of the
//! three primaries).

use crate::io::error::{Result, WeaveError, invalid_parameter};
use crate::weave::thread::Thread;

/// The three primaries in code order, the base tuple of the cyclic patterns
const RGB: [Thread; 3] = [Thread::Red, Thread::Green, Thread::Blue];

/// The primaries reversed
const BGR: [Thread; 3] = [Thread::Blue, Thread::Green, Thread::Red];

/// Registry keys of every named boundary sequence
pub const SEQUENCE_NAMES: [&str; 7] = [
    "g-r..", "r-g-b", "g-b-r", "b-r-g", "b-g-r", "g-r-b", "r-b-g",
];

/// How a sequence produces its values
#[derive(Clone, Debug, PartialEq, Eq)]
enum SequenceKind {
    /// One designated thread, then another fixed thread forever
    OnceThen { first: Thread, rest: Thread },
    /// A fixed tuple repeated indefinitely, phase-shifted by an offset
    Cycle { threads: Vec<Thread>, offset: usize },
}

/// An infinite, restartable source of boundary threads
///
/// Implements [`Iterator`] and never returns `None`. Cloning yields an
/// independent instance with its own cursor; [`ThreadSequence::reset`]
/// rewinds to the first value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadSequence {
    kind: SequenceKind,
    cursor: usize,
}

impl ThreadSequence {
    /// Sequence yielding `first` once, then `rest` forever
    pub const fn once_then(first: Thread, rest: Thread) -> Self {
        Self {
            kind: SequenceKind::OnceThen { first, rest },
            cursor: 0,
        }
    }

    /// Cyclic repetition of `threads`, starting `offset` steps in
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::InvalidParameter`] for an empty tuple.
    pub fn cycle(threads: Vec<Thread>, offset: usize) -> Result<Self> {
        if threads.is_empty() {
            return Err(invalid_parameter(
                "threads",
                &"[]",
                &"cyclic sequence definition is empty",
            ));
        }
        Ok(Self {
            kind: SequenceKind::Cycle { threads, offset },
            cursor: 0,
        })
    }

    /// Rewind to the first value
    pub const fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Iterator for ThreadSequence {
    type Item = Thread;

    fn next(&mut self) -> Option<Thread> {
        let value = match &self.kind {
            SequenceKind::OnceThen { first, rest } => {
                if self.cursor == 0 { *first } else { *rest }
            }
            SequenceKind::Cycle { threads, offset } => threads
                .get((offset + self.cursor) % threads.len())
                .copied()?,
        };
        self.cursor += 1;
        Some(value)
    }
}

/// Fresh instance of a named boundary sequence
///
/// Each call starts from the sequence's own first value; instances share no
/// cursor state.
///
/// # Errors
///
/// Returns [`WeaveError::UnknownSequence`] for a name absent from the
/// registry.
pub fn sequence_by_name(name: &str) -> Result<ThreadSequence> {
    match name {
        "g-r.." => Ok(ThreadSequence::once_then(Thread::Green, Thread::Red)),
        "r-g-b" => ThreadSequence::cycle(RGB.to_vec(), 0),
        "g-b-r" => ThreadSequence::cycle(RGB.to_vec(), 1),
        "b-r-g" => ThreadSequence::cycle(RGB.to_vec(), 2),
        "b-g-r" => ThreadSequence::cycle(BGR.to_vec(), 0),
        "g-r-b" => ThreadSequence::cycle(BGR.to_vec(), 1),
        "r-b-g" => ThreadSequence::cycle(BGR.to_vec(), 2),
        _ => Err(WeaveError::UnknownSequence {
            name: name.to_string(),
        }),
    }
}
