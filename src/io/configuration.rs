//! Rendering constants and runtime configuration defaults

// Renderer geometry
/// Square pixel footprint of one woven cell
pub const CELL_STRIDE: usize = 5;

// Safety limit to keep cell and pixel buffers within sane memory
/// Maximum accepted fractal rank
pub const MAX_RANK: u32 = 8;

// Default values for configurable parameters
/// Rule used when none is requested
pub const DEFAULT_RULE: &str = "knot";

/// Boundary sequence used for both axes when none is requested
pub const DEFAULT_SEQUENCE: &str = "g-r..";

/// Palette used when none is requested
pub const DEFAULT_PALETTE: &str = "pleasant";

// Output settings
/// Extension of rendered output files
pub const OUTPUT_EXTENSION: &str = "png";
