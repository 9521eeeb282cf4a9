//! Crash-safe snapshot writer
//!
//! Always writes the current layout: λ follows ω unconditionally. Only the
//! reader understands the older layout without λ.
//!
//! # Crash Safety
//!
//! 1. Write to a sibling temporary file (`.NAME.tmp`)
//! 2. Flush and fsync the temporary file
//! 3. Atomic rename onto the destination
//! 4. fsync the parent directory
//!
//! Either the complete new snapshot is visible or the previous file is left
//! untouched, which also makes converting a file in place safe.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use solsnap_core::{DomainDescriptor, ScalarField};
use tracing::{debug, info, warn};

use crate::config::ProbeConfig;
use crate::error::{SnapshotError, SnapshotResult, WriteSource};
use crate::format::FixedWidthWriter;
use crate::record::{AxisymmetricRecord, RecordKind, SphericalRecord};
use crate::snapshot::probe::looks_like_lambda;

/// Information about a written snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    /// Final path of the snapshot
    pub path: PathBuf,
    /// Layout written
    pub kind: RecordKind,
    /// File size in bytes
    pub size: u64,
}

/// Snapshot writer with crash-safe semantics
#[derive(Debug, Clone, Default)]
pub struct SnapshotWriter {
    _private: (),
}

impl SnapshotWriter {
    /// Create a new snapshot writer
    pub fn new() -> Self {
        SnapshotWriter { _private: () }
    }

    /// Write an axisymmetric record
    ///
    /// Layout: space, `kk`, ω, λ, then the five fields in disk order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] if the destination cannot be created and
    /// [`SnapshotError::Write`] if writing or committing it fails.
    pub fn save_axisymmetric<F: ScalarField>(
        &self,
        path: &Path,
        record: &AxisymmetricRecord<F>,
    ) -> SnapshotResult<SnapshotInfo> {
        warn_if_unreadable_lambda(path, record.lambda);
        self.write_atomic(path, RecordKind::Axisymmetric, |w| {
            record.space.write(w.get_mut())?;
            w.write_i32(record.kk)?;
            w.write_f64(record.omega)?;
            w.write_f64(record.lambda)?;
            for field in record.fields() {
                field.write(w.get_mut())?;
            }
            Ok(())
        })
    }

    /// Write a spherical record
    ///
    /// Layout: space, ω, λ, then the three fields in disk order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] if the destination cannot be created and
    /// [`SnapshotError::Write`] if writing or committing it fails.
    pub fn save_spherical<F: ScalarField>(
        &self,
        path: &Path,
        record: &SphericalRecord<F>,
    ) -> SnapshotResult<SnapshotInfo> {
        warn_if_unreadable_lambda(path, record.lambda);
        self.write_atomic(path, RecordKind::Spherical, |w| {
            record.space.write(w.get_mut())?;
            w.write_f64(record.omega)?;
            w.write_f64(record.lambda)?;
            for field in record.fields() {
                field.write(w.get_mut())?;
            }
            Ok(())
        })
    }

    fn write_atomic(
        &self,
        path: &Path,
        kind: RecordKind,
        body: impl FnOnce(&mut FixedWidthWriter<BufWriter<File>>) -> solsnap_core::Result<()>,
    ) -> SnapshotResult<SnapshotInfo> {
        debug!(path = %path.display(), %kind, "Writing snapshot");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SnapshotError::open(path, e))?;
            }
        }

        let temp_path = temp_path_for(path);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| SnapshotError::open(path, e))?;

        let committed = commit(file, &temp_path, path, body);
        if committed.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        let size = committed.map_err(|e| SnapshotError::write(path, e))?;

        info!(path = %path.display(), %kind, size, "Snapshot written");
        Ok(SnapshotInfo {
            path: path.to_path_buf(),
            kind,
            size,
        })
    }
}

/// A default reader will take these λ bytes for the first field header.
fn warn_if_unreadable_lambda(path: &Path, lambda: f64) {
    if !looks_like_lambda(lambda, &ProbeConfig::default()) {
        warn!(
            path = %path.display(),
            lambda,
            "Stored lambda is outside the default probe bound"
        );
    }
}

fn commit(
    file: File,
    temp_path: &Path,
    final_path: &Path,
    body: impl FnOnce(&mut FixedWidthWriter<BufWriter<File>>) -> solsnap_core::Result<()>,
) -> Result<u64, WriteSource> {
    let mut writer = FixedWidthWriter::new(BufWriter::new(file));
    body(&mut writer)?;

    let file = writer
        .into_inner()
        .into_inner()
        .map_err(|e| WriteSource::from(e.into_error()))?;
    file.sync_all()?;
    let size = file.metadata()?.len();
    drop(file);

    fs::rename(temp_path, final_path)?;
    sync_parent(final_path)?;
    Ok(size)
}

#[cfg(unix)]
fn sync_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => File::open(parent)?.sync_all(),
        _ => File::open(".")?.sync_all(),
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) -> io::Result<()> {
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
