//! Snapshot reader
//!
//! Decodes either record layout, accepting both the current layout (λ stored
//! after ω) and the older one (no λ). Each call opens its own handle, builds a
//! fresh record, and drops the handle before returning.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::marker::PhantomData;
use std::path::Path;

use solsnap_core::{DomainDescriptor, Scalar, ScalarField};
use tracing::debug;

use super::probe::{probe_lambda, LambdaProbe};
use super::sniff::{sniff_kind, Sniffed};
use crate::config::ProbeConfig;
use crate::error::{SnapshotError, SnapshotResult};
use crate::format::FixedWidthReader;
use crate::record::{AxisymmetricRecord, Decoded, RecordKind, Snapshot, SphericalRecord};

/// Snapshot reader, generic over the scalar field collaborator
pub struct SnapshotReader<F: ScalarField = Scalar> {
    config: ProbeConfig,
    _field: PhantomData<fn() -> F>,
}

impl<F: ScalarField> Default for SnapshotReader<F> {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl<F: ScalarField> SnapshotReader<F> {
    /// Create a reader with the given layout thresholds
    pub fn new(config: ProbeConfig) -> Self {
        SnapshotReader {
            config,
            _field: PhantomData,
        }
    }

    /// Layout thresholds in use
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Detect which record layout the file holds
    ///
    /// # Errors
    ///
    /// See [`sniff_kind`].
    pub fn detect_kind(&self, path: &Path) -> SnapshotResult<Sniffed> {
        sniff_kind::<F::Domain>(path, &self.config)
    }

    /// Decode an axisymmetric record
    ///
    /// `lambda_default` is used when the file stores no λ.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] if the file cannot be opened and
    /// [`SnapshotError::Format`] if a mandatory field or composite cannot be read.
    pub fn read_axisymmetric(
        &self,
        path: &Path,
        lambda_default: f64,
    ) -> SnapshotResult<Decoded<AxisymmetricRecord<F>>> {
        let mut reader = open(path)?;
        let space = read_space::<F::Domain, _>(&mut reader, path)?;

        let kk = reader
            .read_i32()
            .map_err(|e| SnapshotError::format(path, "azimuthal index", e))?;
        let omega = reader
            .read_f64()
            .map_err(|e| SnapshotError::format(path, "omega", e))?;
        let (lambda, has_lambda) =
            self.read_optional_lambda(&mut reader, &space, path, lambda_default)?;

        let [lapse, radial_metric, areal_metric, shift, matter] =
            AxisymmetricRecord::<F>::FIELD_NAMES;
        let record = AxisymmetricRecord {
            kk,
            omega,
            lambda,
            lapse: read_field::<F, _>(&mut reader, &space, path, lapse)?,
            radial_metric: read_field::<F, _>(&mut reader, &space, path, radial_metric)?,
            areal_metric: read_field::<F, _>(&mut reader, &space, path, areal_metric)?,
            shift: read_field::<F, _>(&mut reader, &space, path, shift)?,
            matter: read_field::<F, _>(&mut reader, &space, path, matter)?,
            space,
        };
        drop(reader);

        debug!(
            path = %path.display(),
            kk,
            omega,
            lambda,
            has_lambda,
            "Decoded axisymmetric snapshot"
        );
        Ok(Decoded { record, has_lambda })
    }

    /// Decode a spherical record
    ///
    /// `lambda_default` is used when the file stores no λ.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] if the file cannot be opened and
    /// [`SnapshotError::Format`] if a mandatory field or composite cannot be read.
    pub fn read_spherical(
        &self,
        path: &Path,
        lambda_default: f64,
    ) -> SnapshotResult<Decoded<SphericalRecord<F>>> {
        let mut reader = open(path)?;
        let space = read_space::<F::Domain, _>(&mut reader, path)?;

        let omega = reader
            .read_f64()
            .map_err(|e| SnapshotError::format(path, "omega", e))?;
        let (lambda, has_lambda) =
            self.read_optional_lambda(&mut reader, &space, path, lambda_default)?;

        let [conformal, lapse, matter] = SphericalRecord::<F>::FIELD_NAMES;
        let record = SphericalRecord {
            omega,
            lambda,
            conformal: read_field::<F, _>(&mut reader, &space, path, conformal)?,
            lapse: read_field::<F, _>(&mut reader, &space, path, lapse)?,
            matter: read_field::<F, _>(&mut reader, &space, path, matter)?,
            space,
        };
        drop(reader);

        debug!(
            path = %path.display(),
            omega,
            lambda,
            has_lambda,
            "Decoded spherical snapshot"
        );
        Ok(Decoded { record, has_lambda })
    }

    /// Sniff the layout, then decode with the matching reader
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SnapshotReader::detect_kind`] and the decoders.
    pub fn load(&self, path: &Path, lambda_default: f64) -> SnapshotResult<Snapshot<F>> {
        match self.detect_kind(path)?.kind {
            RecordKind::Axisymmetric => self
                .read_axisymmetric(path, lambda_default)
                .map(Snapshot::Axisymmetric),
            RecordKind::Spherical => self
                .read_spherical(path, lambda_default)
                .map(Snapshot::Spherical),
        }
    }

    fn read_optional_lambda<R: Read + Seek>(
        &self,
        reader: &mut FixedWidthReader<R>,
        space: &F::Domain,
        path: &Path,
        lambda_default: f64,
    ) -> SnapshotResult<(f64, bool)> {
        let probe = probe_lambda(reader, space.dimensionality(), &self.config)
            .map_err(|e| SnapshotError::format(path, "lambda", e))?;
        match probe {
            LambdaProbe::Present(lambda) => Ok((lambda, true)),
            LambdaProbe::Absent(reason) => {
                debug!(
                    path = %path.display(),
                    reason = ?reason,
                    lambda_default,
                    "No lambda stored, using default"
                );
                Ok((lambda_default, false))
            }
        }
    }
}

fn open(path: &Path) -> SnapshotResult<FixedWidthReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| SnapshotError::open(path, e))?;
    Ok(FixedWidthReader::new(BufReader::new(file)))
}

fn read_space<D: DomainDescriptor, R: Read + Seek>(
    reader: &mut FixedWidthReader<R>,
    path: &Path,
) -> SnapshotResult<D> {
    D::parse(reader.get_mut()).map_err(|e| SnapshotError::format(path, "domain descriptor", e))
}

fn read_field<F: ScalarField, R: Read + Seek>(
    reader: &mut FixedWidthReader<R>,
    space: &F::Domain,
    path: &Path,
    name: &'static str,
) -> SnapshotResult<F> {
    F::parse(reader.get_mut(), space).map_err(|e| SnapshotError::format(path, name, e))
}
