//! Record kind detection
//!
//! Axisymmetric records open with a small azimuthal index right after the
//! domain descriptor. Spherical records open with ω, whose high word read as
//! an `i32` is far outside the index range for any physically sensible
//! frequency. This is a heuristic: a spherical ω below roughly 1e-307 in
//! magnitude would be misclassified.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use solsnap_core::DomainDescriptor;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::{SnapshotError, SnapshotResult};
use crate::format::FixedWidthReader;
use crate::record::RecordKind;

/// Result of sniffing a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed {
    /// Detected layout
    pub kind: RecordKind,
    /// Azimuthal index read during detection (`Some` only for axisymmetric)
    pub kk_guess: Option<i32>,
}

/// Classify the leading `i32` after the descriptor
///
/// `None` means the stream ended before four bytes could be read.
pub fn classify_leading_int(leading: Option<i32>, config: &ProbeConfig) -> Sniffed {
    match leading {
        Some(kk) if kk.unsigned_abs() <= config.kk_max_abs.unsigned_abs() => Sniffed {
            kind: RecordKind::Axisymmetric,
            kk_guess: Some(kk),
        },
        _ => Sniffed {
            kind: RecordKind::Spherical,
            kk_guess: None,
        },
    }
}

/// Detect which record layout the file at `path` holds
///
/// Parses and discards the domain descriptor, then reads one `i32`. The file
/// handle is released before returning on every path.
///
/// # Errors
///
/// Returns [`SnapshotError::Open`] if the file cannot be opened and
/// [`SnapshotError::Format`] if the domain descriptor cannot be parsed.
pub fn sniff_kind<D: DomainDescriptor>(
    path: &Path,
    config: &ProbeConfig,
) -> SnapshotResult<Sniffed> {
    let file = File::open(path).map_err(|e| SnapshotError::open(path, e))?;
    let mut reader = FixedWidthReader::new(BufReader::new(file));

    let space = D::parse(reader.get_mut())
        .map_err(|e| SnapshotError::format(path, "domain descriptor", e))?;
    let leading = reader
        .try_read_i32()
        .map_err(|e| SnapshotError::format(path, "leading value", e))?;

    let sniffed = classify_leading_int(leading, config);
    debug!(
        path = %path.display(),
        domains = space.domain_count(),
        leading = ?leading,
        kind = %sniffed.kind,
        "Sniffed snapshot kind"
    );
    Ok(sniffed)
}
