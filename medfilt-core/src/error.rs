//! Error types for medfilt-core.

use thiserror::Error;

/// Result type alias for median filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Usage errors detected before any filtering work begins.
///
/// All variants are surfaced synchronously by the dispatch layer; the engine
/// itself has no fallible operations once its inputs are validated.
#[derive(Error, Debug)]
pub enum Error {
    /// Kernel dimension is even, zero, or mismatched to the array rank.
    #[error("invalid kernel size: {0}")]
    InvalidKernelSize(String),

    /// Element type name not in the supported set.
    #[error("unsupported element type: {0:?}")]
    UnsupportedElementType(String),

    /// Boundary mode string not one of "nearest", "reflect", "mirror", "shrink".
    #[error("unrecognized boundary mode: {0:?}")]
    UnrecognizedBoundaryMode(String),

    /// Flat buffer length inconsistent with the requested shape.
    #[error("shape mismatch: image shape ({rows}, {cols}) is inconsistent with buffer length {len}")]
    ShapeMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Length of the buffer actually provided.
        len: usize,
    },
}
