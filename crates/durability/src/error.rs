//! Snapshot error types
//!
//! Every variant carries the path of the file being read or written. A
//! missing optional λ is never an error; the reader degrades to the caller's
//! default instead.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for snapshot operations
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

/// Errors that can occur while sniffing, reading, or writing a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be opened in the requested mode
    #[error("Cannot open snapshot '{}'", path.display())]
    Open {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A mandatory field or composite could not be fully read
    #[error("Malformed snapshot '{}': failed to read {field}", path.display())]
    Format {
        /// Offending path
        path: PathBuf,
        /// Field being read when decoding failed
        field: &'static str,
        /// Underlying model error (short read or invalid blob)
        #[source]
        source: solsnap_core::Error,
    },

    /// Writing or committing the snapshot failed after the destination was opened
    #[error("Failed to write snapshot '{}'", path.display())]
    Write {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl SnapshotError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        SnapshotError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(
        path: &Path,
        field: &'static str,
        source: impl Into<solsnap_core::Error>,
    ) -> Self {
        SnapshotError::Format {
            path: path.to_path_buf(),
            field,
            source: source.into(),
        }
    }

    pub(crate) fn write(path: &Path, source: impl Into<WriteSource>) -> Self {
        SnapshotError::Write {
            path: path.to_path_buf(),
            source: source.into().0,
        }
    }

    /// Path of the snapshot that caused the error
    pub fn path(&self) -> &Path {
        match self {
            SnapshotError::Open { path, .. }
            | SnapshotError::Format { path, .. }
            | SnapshotError::Write { path, .. } => path,
        }
    }
}

/// I/O cause of a write failure, flattened from either error layer
pub(crate) struct WriteSource(io::Error);

impl From<io::Error> for WriteSource {
    fn from(e: io::Error) -> Self {
        WriteSource(e)
    }
}

impl From<solsnap_core::Error> for WriteSource {
    fn from(e: solsnap_core::Error) -> Self {
        match e {
            solsnap_core::Error::Io(e) => WriteSource(e),
            other => WriteSource(io::Error::new(io::ErrorKind::InvalidData, other)),
        }
    }
}
