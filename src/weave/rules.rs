//! Crossing rule variants and their memoized lookup table
//!
//! A rule is a pure function `(up, left, crossing) -> Cell`: the incoming
//! threads pass through unchanged and the thread underneath the crossing is
//! rewritten. Because the input domain is tiny (at most 4 x 4 x 2 triples)
//! every rule is evaluated once per triple into a [`RuleTable`] owned by the
//! weave engine, and grid construction only ever performs table lookups.

use crate::io::error::{Result, WeaveError};
use crate::weave::grid::Cell;
use crate::weave::thread::{Crossing, Thread};

/// The closed set of crossing rule variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// 3-colour: unequal threads rewrite the under thread to the third colour
    Knot,
    /// 2-colour: the under thread is flipped unless the over thread is red
    Xor,
    /// 3-colour: under thread becomes `(up + left) mod 3`
    Mod3,
    /// 3-colour: under thread becomes the over-minus-under difference mod 3
    Smod3,
}

impl RuleKind {
    /// Every rule variant, in registry order
    pub const ALL: [Self; 4] = [Self::Knot, Self::Xor, Self::Mod3, Self::Smod3];

    /// Registry key for this rule
    pub const fn name(self) -> &'static str {
        match self {
            Self::Knot => "knot",
            Self::Xor => "xor",
            Self::Mod3 => "mod3",
            Self::Smod3 => "smod3",
        }
    }

    /// Look up a rule by its registry key
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::UnknownRule`] for a name absent from the
    /// registry.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| WeaveError::UnknownRule {
                name: name.to_string(),
            })
    }

    /// Whether a thread lies inside this rule's colour domain
    ///
    /// The knot and modular rules operate on the three primaries; xor only
    /// distinguishes red from green. Anything else must fail loudly rather
    /// than produce a silently defaulted cell.
    pub const fn admits(self, thread: Thread) -> bool {
        match self {
            Self::Knot | Self::Mod3 | Self::Smod3 => (thread as u8) < 3,
            Self::Xor => (thread as u8) < 2,
        }
    }

    /// Evaluate the rule directly, `None` marking an out-of-domain input
    ///
    /// Pure and deterministic; [`RuleTable`] memoizes this over the full
    /// input domain.
    fn evaluate(self, up: Thread, left: Thread, cross: Crossing) -> Option<Cell> {
        if !self.admits(up) || !self.admits(left) {
            return None;
        }
        match self {
            Self::Knot => {
                if up == left {
                    return Some(pass_through(up, left));
                }
                let third = Thread::PRIMARIES
                    .into_iter()
                    .find(|&t| t != up && t != left)?;
                Some(rewrite(cross, up, left, third))
            }
            Self::Xor => {
                let (over, under) = match cross {
                    Crossing::Warp => (left, up),
                    Crossing::Weft => (up, left),
                };
                if over == Thread::Red {
                    return Some(pass_through(up, left));
                }
                let flipped = match under {
                    Thread::Red => Thread::Green,
                    _ => Thread::Red,
                };
                Some(rewrite(cross, up, left, flipped))
            }
            Self::Mod3 => {
                let out = Thread::from_code((up.code() + left.code()) % 3)?;
                Some(rewrite(cross, up, left, out))
            }
            Self::Smod3 => {
                let (over, under) = match cross {
                    Crossing::Warp => (up, left),
                    Crossing::Weft => (left, up),
                };
                let out = Thread::from_code((under.code() + 3 - over.code()) % 3)?;
                Some(rewrite(cross, up, left, out))
            }
        }
    }
}

/// Cell leaving both threads unchanged
const fn pass_through(up: Thread, left: Thread) -> Cell {
    Cell {
        up,
        left,
        down: up,
        right: left,
    }
}

/// Cell with the under thread rewritten for the given orientation
///
/// Warp rewrites the vertical continuation (`down`); Weft the horizontal
/// one (`right`). The over thread always continues unchanged.
const fn rewrite(cross: Crossing, up: Thread, left: Thread, changed: Thread) -> Cell {
    match cross {
        Crossing::Warp => Cell {
            up,
            left,
            down: changed,
            right: left,
        },
        Crossing::Weft => Cell {
            up,
            left,
            down: up,
            right: changed,
        },
    }
}

/// Memoized crossing rule, fully evaluated at construction
///
/// Owned by a weave engine instance rather than shared process-wide, so
/// repeated runs and tests start from a fresh table. Out-of-domain entries
/// are stored as `None` and surface as [`WeaveError::RuleDomain`] on lookup.
#[derive(Clone, Debug)]
pub struct RuleTable {
    kind: RuleKind,
    entries: [[[Option<Cell>; 2]; 4]; 4],
}

impl RuleTable {
    /// Precompute the rule over its full input domain
    pub fn new(kind: RuleKind) -> Self {
        let mut entries = [[[None; 2]; 4]; 4];
        for up in Thread::ALL {
            for left in Thread::ALL {
                for cross in [Crossing::Warp, Crossing::Weft] {
                    let slot = entries
                        .get_mut(up.code() as usize)
                        .and_then(|row| row.get_mut(left.code() as usize))
                        .and_then(|pair| pair.get_mut(cross as usize));
                    if let Some(slot) = slot {
                        *slot = kind.evaluate(up, left, cross);
                    }
                }
            }
        }
        Self { kind, entries }
    }

    /// The rule variant this table evaluates
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Cell produced by the rule for an incoming thread pair and orientation
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::RuleDomain`] when either thread lies outside
    /// the rule's colour domain.
    pub fn cell(&self, up: Thread, left: Thread, cross: Crossing) -> Result<Cell> {
        self.entries
            .get(up.code() as usize)
            .and_then(|row| row.get(left.code() as usize))
            .and_then(|pair| pair.get(cross as usize))
            .copied()
            .flatten()
            .ok_or(WeaveError::RuleDomain {
                rule: self.kind.name(),
                up,
                left,
            })
    }
}
