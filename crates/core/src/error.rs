//! Error types for the collaborator model
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, parsing, or writing model types
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error, including a short read in the middle of a blob
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dimension count not supported by the descriptor
    #[error("Invalid dimension count: {0}")]
    InvalidDimension(i32),

    /// Domain count out of range
    #[error("Invalid domain count: {0}")]
    InvalidDomainCount(i32),

    /// Unknown spectral basis type tag
    #[error("Invalid spectral basis type: {0}")]
    InvalidSpectralBasis(i32),

    /// Resolution entry below one point
    #[error("Invalid resolution along axis {axis}: {points}")]
    InvalidResolution {
        /// Axis index
        axis: usize,
        /// Point count found
        points: i32,
    },

    /// Radial bounds not finite, positive, and strictly increasing
    #[error("Invalid domain bounds: {0}")]
    InvalidBounds(String),

    /// Scalar basis flag outside {0, 1}
    #[error("Invalid scalar basis flag: {found}")]
    BasisFlag {
        /// Flag found in the stream
        found: i32,
    },

    /// Scalar dimension count differs from its space
    #[error("Dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// Dimensionality of the space
        expected: i32,
        /// Dimensionality declared by the scalar
        found: i32,
    },

    /// Scalar domain count differs from its space
    #[error("Domain count mismatch: expected {expected}, got {found}")]
    DomainCountMismatch {
        /// Domain count of the space
        expected: usize,
        /// Domain count declared by the scalar
        found: i32,
    },
}
