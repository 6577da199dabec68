//! Input/output operations: CLI, palettes, rasterization, error handling

/// Command-line interface and render job orchestration
pub mod cli;
/// Rendering constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Rasterization and PNG export
pub mod image;
/// Thread-to-RGB palettes
pub mod palette;
/// ASCII grid preview
pub mod preview;
/// Stage progress reporting
pub mod progress;
