//! Error types for generator operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
///
/// Resolution is pure and deterministic, so every failure here is a logic
/// or configuration error rather than a transient condition; repeating the
/// same call fails identically and nothing is retried.
#[derive(Debug)]
pub enum GeneratorError {
    /// Seed input could not be turned into a deterministic stream
    Seeding {
        /// Description of why derivation was rejected
        reason: String,
    },

    /// Seeded stream exhausted before all choices were resolved
    ///
    /// Indicates a mismatch between stream capacity and the number of
    /// decision points in the pattern graph; a bot is never silently
    /// truncated.
    EntropyExhausted {
        /// Bits the failing draw needed
        requested: usize,
        /// Bits left in the stream
        available: usize,
    },

    /// Choice group construction with a defective anchor/alternative pairing
    MalformedChoiceGroup {
        /// Number of anchors in the group
        anchors: usize,
        /// Number of alternatives in the offending list
        alternatives: usize,
        /// Explanation of the defect
        reason: String,
    },

    /// Arena handle does not name a catalog entry
    UnknownHandle {
        /// Kind of handle, `template` or `pattern`
        kind: &'static str,
        /// The out-of-range index
        index: usize,
        /// Number of entries in the arena
        count: usize,
    },

    /// Failed to load a part asset from the filesystem
    AssetLoad {
        /// Path to the asset file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a composited bot to disk
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

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeding { reason } => {
                write!(f, "Failed to derive a seeded stream: {reason}")
            }
            Self::EntropyExhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Seeded stream exhausted: draw needs {requested} bits but {available} remain"
                )
            }
            Self::MalformedChoiceGroup {
                anchors,
                alternatives,
                reason,
            } => {
                write!(
                    f,
                    "Malformed choice group ({anchors} anchors, {alternatives} alternatives): {reason}"
                )
            }
            Self::UnknownHandle { kind, index, count } => {
                write!(f, "Unknown {kind} handle {index} (catalog holds {count})")
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load asset '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export bot to '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown handle error
pub const fn unknown_handle(kind: &'static str, index: usize, count: usize) -> GeneratorError {
    GeneratorError::UnknownHandle { kind, index, count }
}
