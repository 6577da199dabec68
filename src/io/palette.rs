//! Thread-to-RGB palettes for rasterization
//!
//! The weave engine knows nothing about colours on screen; a palette maps
//! each of the four threads to an RGB triple at render time.

use crate::io::error::{Result, WeaveError};
use crate::weave::thread::Thread;

/// An RGB triple
pub type Colour = [u8; 3];

/// Registry keys of every named palette
pub const PALETTE_NAMES: [&str; 2] = ["primary", "pleasant"];

/// Mapping from each thread to its rendered colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colours: [Colour; 4],
}

/// Saturated primaries, one per thread code
pub const PRIMARY: Palette = Palette {
    colours: [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
    ],
};

/// Softer default palette
pub const PLEASANT: Palette = Palette {
    colours: [
        [214, 126, 195],
        [24, 185, 196],
        [128, 65, 196],
        [128, 196, 65],
    ],
};

impl Palette {
    /// Rendered colour of a thread
    pub fn colour(&self, thread: Thread) -> Colour {
        self.colours
            .get(thread.code() as usize)
            .copied()
            .unwrap_or([0, 0, 0])
    }
}

/// Look up a palette by its registry key
///
/// # Errors
///
/// Returns [`WeaveError::UnknownPalette`] for a name absent from the
/// registry.
pub fn palette_by_name(name: &str) -> Result<Palette> {
    match name {
        "primary" => Ok(PRIMARY),
        "pleasant" => Ok(PLEASANT),
        _ => Err(WeaveError::UnknownPalette {
            name: name.to_string(),
        }),
    }
}
