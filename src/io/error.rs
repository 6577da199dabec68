//! Error types for weave construction and export
//!
//! Every failure is a construction-time failure: a grid is either fully and
//! correctly populated or an error surfaces before any cell is exposed.
//! Nothing here is retryable, the engine is fully deterministic.

use crate::weave::thread::Thread;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all weave operations
#[derive(Debug)]
pub enum WeaveError {
    /// Parameter validation failed (zero size, rank overflow, empty
    /// sequence definition)
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rule name absent from the rule registry
    UnknownRule {
        /// The unrecognized name
        name: String,
    },

    /// Sequence name absent from the boundary sequence registry
    UnknownSequence {
        /// The unrecognized name
        name: String,
    },

    /// Palette name absent from the palette registry
    UnknownPalette {
        /// The unrecognized name
        name: String,
    },

    /// A rule was invoked with a thread outside its colour domain
    ///
    /// Unreachable under correct orchestration; surfacing it keeps latent
    /// domain mismatches visible instead of silently defaulting a cell.
    RuleDomain {
        /// Name of the rule
        rule: &'static str,
        /// Incoming thread from above
        up: Thread,
        /// Incoming thread from the left
        left: Thread,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WeaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownRule { name } => {
                write!(f, "Unknown rule '{name}'")
            }
            Self::UnknownSequence { name } => {
                write!(f, "Unknown boundary sequence '{name}'")
            }
            Self::UnknownPalette { name } => {
                write!(f, "Unknown palette '{name}'")
            }
            Self::RuleDomain { rule, up, left } => {
                write!(
                    f,
                    "Rule '{rule}' invoked outside its colour domain (up {up}, left {left})"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WeaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for weave results
pub type Result<T> = std::result::Result<T, WeaveError>;

impl From<std::io::Error> for WeaveError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WeaveError {
    WeaveError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> WeaveError {
    WeaveError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
