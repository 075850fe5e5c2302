//! Error types for extraction operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all extraction operations
#[derive(Debug)]
pub enum ExtractError {
    /// Failed to decode a sheet image from the filesystem
    ///
    /// Per-sheet and recoverable: the batch reports the sheet and continues.
    SheetLoad {
        /// Path to the sheet image
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an extracted icon to disk
    ///
    /// Fatal for the batch: no icons can be durably produced.
    IconExport {
        /// Path where the icon was being written
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General filesystem operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SheetLoad { path, source } => {
                write!(f, "Failed to load sheet '{}': {source}", path.display())
            }
            Self::IconExport { path, source } => {
                write!(f, "Failed to write icon '{}': {source}", path.display())
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

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SheetLoad { source, .. } | Self::IconExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl ExtractError {
    /// Whether the error is scoped to one sheet and the batch may continue
    pub const fn is_per_sheet(&self) -> bool {
        matches!(self, Self::SheetLoad { .. })
    }
}

/// Convenience type alias for extraction results
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ExtractError {
    ExtractError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
