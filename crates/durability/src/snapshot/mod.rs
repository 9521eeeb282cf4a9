//! Solution snapshot codec
//!
//! ## File Layout
//!
//! ```text
//! [Domain descriptor: self-delimiting blob]
//! Axisymmetric: [kk: i32][omega: f64]{[lambda: f64]}[5 x scalar field]
//! Spherical:               [omega: f64]{[lambda: f64]}[3 x scalar field]
//! ```
//!
//! `{...}` is present in files from the current writer and absent in files
//! from older ones. There is no magic number and no version field: the kind
//! is sniffed from the value after the descriptor, and λ is detected by a
//! speculative read that rolls back unless it passes both a value-range check
//! and a structural peek at the next scalar header.
//!
//! ## Usage
//!
//! ```ignore
//! let sniffed = detect_kind(path)?;
//! match sniffed.kind {
//!     RecordKind::Axisymmetric => load_axisymmetric(path, 0.0, |record, has_lambda| {
//!         println!("kk = {} omega = {}", record.kk, record.omega);
//!     })?,
//!     RecordKind::Spherical => load_spherical(path, 0.0, |record, has_lambda| {
//!         println!("omega = {}", record.omega);
//!     })?,
//! }
//! ```

pub mod probe;
pub mod reader;
pub mod sniff;
pub mod writer;

use std::path::Path;

use solsnap_core::Scalar;

pub use probe::{looks_like_lambda, probe_lambda, AbsentReason, LambdaProbe};
pub use reader::SnapshotReader;
pub use sniff::{classify_leading_int, sniff_kind, Sniffed};
pub use writer::{SnapshotInfo, SnapshotWriter};

use crate::error::SnapshotResult;
use crate::record::{AxisymmetricRecord, SphericalRecord};

/// Detect the record layout of a polar snapshot with the default thresholds
///
/// # Errors
///
/// See [`sniff_kind`].
pub fn detect_kind(path: &Path) -> SnapshotResult<Sniffed> {
    SnapshotReader::<Scalar>::default().detect_kind(path)
}

/// Decode an axisymmetric snapshot and hand it to `f`
///
/// `f` receives the record and whether λ was stored in the file. The file is
/// closed before `f` runs.
///
/// # Errors
///
/// See [`SnapshotReader::read_axisymmetric`].
pub fn load_axisymmetric<T>(
    path: &Path,
    lambda_default: f64,
    f: impl FnOnce(AxisymmetricRecord, bool) -> T,
) -> SnapshotResult<T> {
    let decoded = SnapshotReader::<Scalar>::default().read_axisymmetric(path, lambda_default)?;
    Ok(f(decoded.record, decoded.has_lambda))
}

/// Decode a spherical snapshot and hand it to `f`
///
/// `f` receives the record and whether λ was stored in the file. The file is
/// closed before `f` runs.
///
/// # Errors
///
/// See [`SnapshotReader::read_spherical`].
pub fn load_spherical<T>(
    path: &Path,
    lambda_default: f64,
    f: impl FnOnce(SphericalRecord, bool) -> T,
) -> SnapshotResult<T> {
    let decoded = SnapshotReader::<Scalar>::default().read_spherical(path, lambda_default)?;
    Ok(f(decoded.record, decoded.has_lambda))
}

/// Write an axisymmetric record in the current layout
///
/// # Errors
///
/// See [`SnapshotWriter::save_axisymmetric`].
pub fn save_axisymmetric(
    path: &Path,
    record: &AxisymmetricRecord,
) -> SnapshotResult<SnapshotInfo> {
    SnapshotWriter::new().save_axisymmetric(path, record)
}

/// Write a spherical record in the current layout
///
/// # Errors
///
/// See [`SnapshotWriter::save_spherical`].
pub fn save_spherical(path: &Path, record: &SphericalRecord) -> SnapshotResult<SnapshotInfo> {
    SnapshotWriter::new().save_spherical(path, record)
}
