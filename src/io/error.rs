//! Error types for placement validation and file operations
//!
//! The tiling core itself cannot fail: missing neighbours classify as
//! unassigned and unknown kinds resolve to nothing. Errors only arise where
//! user input or the filesystem is involved.

use crate::io::configuration::{COORDINATE_LIMIT, MAX_PREVIEW_PIXELS};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::tiles::TileKind;
use std::fmt;
use std::path::PathBuf;

/// Main error type for placement and I/O operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to read or parse a level file
    LevelLoad {
        /// Path to the level file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Failed to serialize a level or tiling report
    JsonExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to save a preview image to disk
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

    /// A kind the user cannot place was offered as a placement
    InvalidPlacement {
        /// Where the placement was attempted
        coordinate: GridCoordinate,
        /// The rejected kind
        kind: TileKind,
    },

    /// A placement fell outside the area around existing tiles
    OutsidePlacementArea {
        /// Where the placement was attempted
        coordinate: GridCoordinate,
    },

    /// A placement too close to the integer limits for its neighbours to exist
    CoordinateOutOfRange {
        /// Where the placement was attempted
        coordinate: GridCoordinate,
    },

    /// A preview would exceed the pixel budget
    PreviewTooLarge {
        /// The layer being rendered
        layer: i32,
        /// Requested width in pixels
        width: u64,
        /// Requested height in pixels
        height: u64,
    },

    /// A layer with no tiles was asked for
    EmptyLayer {
        /// The requested vertical layer
        layer: i32,
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

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelLoad { path, source } => {
                write!(f, "Failed to load level '{}': {source}", path.display())
            }
            Self::JsonExport { path, source } => {
                write!(
                    f,
                    "Failed to export JSON to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidPlacement { coordinate, kind } => {
                write!(f, "Cannot place {kind} at {coordinate}: not a user tile kind")
            }
            Self::OutsidePlacementArea { coordinate } => {
                write!(f, "Coordinate {coordinate} is outside the placement area")
            }
            Self::CoordinateOutOfRange { coordinate } => {
                write!(
                    f,
                    "Coordinate {coordinate} is out of range: x and z must lie between -{COORDINATE_LIMIT} and {COORDINATE_LIMIT}"
                )
            }
            Self::PreviewTooLarge {
                layer,
                width,
                height,
            } => {
                write!(
                    f,
                    "Preview of layer {layer} would be {width}x{height} pixels, over the limit of {MAX_PREVIEW_PIXELS}"
                )
            }
            Self::EmptyLayer { layer } => {
                write!(f, "Layer {layer} contains no tiles")
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

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LevelLoad { source, .. } | Self::JsonExport { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
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
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TilingError {
    TilingError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
