//! Colour alphabet and crossing orientation for the weave
//!
//! Threads are the atomic colour symbols carried along rows and columns of
//! the grid. Crossings tag each grid position as warp-over or weft-over in a
//! strict checkerboard, which determines the slot a rule may rewrite.

use std::fmt;

/// One colour symbol from the fixed weave alphabet
///
/// Declaration order doubles as the numeric code used by the modular
/// arithmetic rules, so the variants must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Thread {
    /// Code 0
    Red = 0,
    /// Code 1
    Green = 1,
    /// Code 2
    Blue = 2,
    /// Code 3, only reachable through boundary definitions and palettes
    Yellow = 3,
}

impl Thread {
    /// Every thread colour, in code order
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// The three-colour domain shared by the knot and modular rules
    pub const PRIMARIES: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Numeric code of this thread (its declaration index)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Thread with the given code, if one exists
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Short uppercase name, matching the boundary sequence notation
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GRN",
            Self::Blue => "BLU",
            Self::Yellow => "YEL",
        }
    }
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a grid position: which thread lies underneath
///
/// Alternates in a checkerboard over both axes. A Warp position lets the
/// rule rewrite the vertical (down) thread; a Weft position the horizontal
/// (right) thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Crossing {
    /// Vertical thread underneath; rules may rewrite `down`
    Warp = 0,
    /// Horizontal thread underneath; rules may rewrite `right`
    Weft = 1,
}

impl Crossing {
    /// Orientation at grid position `(x, y)`: Warp on even parity
    pub const fn at(x: usize, y: usize) -> Self {
        if (x + y) % 2 == 0 { Self::Warp } else { Self::Weft }
    }

    /// The opposite orientation
    pub const fn flipped(self) -> Self {
        match self {
            Self::Warp => Self::Weft,
            Self::Weft => Self::Warp,
        }
    }

    /// Orientation after moving `steps` positions along either axis
    ///
    /// Parity flips once per step, so only the parity of `steps` matters.
    /// Used to seed sub-block origins in the divide-and-conquer weave.
    pub const fn shifted(self, steps: usize) -> Self {
        if steps % 2 == 0 { self } else { self.flipped() }
    }
}
