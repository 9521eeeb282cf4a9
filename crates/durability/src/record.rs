//! Snapshot record types
//!
//! A record is built fresh by each decode call and owns everything it holds;
//! it keeps no link to the file it came from. Field order here mirrors the
//! order on disk, which is the only thing that lets a reader find the field
//! boundaries without length prefixes.

use std::fmt;

use serde::{Deserialize, Serialize};
use solsnap_core::{Scalar, ScalarField};

/// Which of the two record layouts a snapshot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Rotating solution: azimuthal index, ω, λ, five fields
    Axisymmetric,
    /// Static solution: ω, λ, three fields
    Spherical,
}

impl RecordKind {
    /// Number of scalar fields following the fixed-width header
    pub fn field_count(self) -> usize {
        match self {
            RecordKind::Axisymmetric => AxisymmetricRecord::<Scalar>::FIELD_NAMES.len(),
            RecordKind::Spherical => SphericalRecord::<Scalar>::FIELD_NAMES.len(),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Axisymmetric => write!(f, "axisymmetric"),
            RecordKind::Spherical => write!(f, "spherical"),
        }
    }
}

/// Axisymmetric solution
///
/// Disk order: space, `kk`, `omega`, `lambda`, then `lapse`,
/// `radial_metric`, `areal_metric`, `shift`, `matter`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisymmetricRecord<F: ScalarField = Scalar> {
    /// Domain decomposition every field is defined over
    pub space: F::Domain,
    /// Azimuthal index
    pub kk: i32,
    /// Angular frequency
    pub omega: f64,
    /// Self-interaction coefficient (the caller's default when the file had none)
    pub lambda: f64,
    /// Lapse potential
    pub lapse: F,
    /// Radial metric potential
    pub radial_metric: F,
    /// Areal metric potential
    pub areal_metric: F,
    /// Shift potential
    pub shift: F,
    /// Matter field
    pub matter: F,
}

impl<F: ScalarField> AxisymmetricRecord<F> {
    /// Field names in disk order
    pub const FIELD_NAMES: [&'static str; 5] =
        ["lapse", "radial_metric", "areal_metric", "shift", "matter"];

    /// Fields in disk order
    pub fn fields(&self) -> [&F; 5] {
        [
            &self.lapse,
            &self.radial_metric,
            &self.areal_metric,
            &self.shift,
            &self.matter,
        ]
    }
}

/// Spherically symmetric solution
///
/// Disk order: space, `omega`, `lambda`, then `conformal`, `lapse`, `matter`.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalRecord<F: ScalarField = Scalar> {
    /// Domain decomposition every field is defined over
    pub space: F::Domain,
    /// Angular frequency
    pub omega: f64,
    /// Self-interaction coefficient (the caller's default when the file had none)
    pub lambda: f64,
    /// Conformal factor potential
    pub conformal: F,
    /// Lapse potential
    pub lapse: F,
    /// Matter field
    pub matter: F,
}

impl<F: ScalarField> SphericalRecord<F> {
    /// Field names in disk order
    pub const FIELD_NAMES: [&'static str; 3] = ["conformal", "lapse", "matter"];

    /// Fields in disk order
    pub fn fields(&self) -> [&F; 3] {
        [&self.conformal, &self.lapse, &self.matter]
    }
}

/// A decoded record plus whether λ was stored in the file
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// The record
    pub record: T,
    /// `true` when λ came from the file, `false` when it was defaulted
    pub has_lambda: bool,
}

/// A snapshot of either kind, as produced by sniff-then-decode
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<F: ScalarField = Scalar> {
    /// Axisymmetric record
    Axisymmetric(Decoded<AxisymmetricRecord<F>>),
    /// Spherical record
    Spherical(Decoded<SphericalRecord<F>>),
}

impl<F: ScalarField> Snapshot<F> {
    /// Layout of the decoded record
    pub fn kind(&self) -> RecordKind {
        match self {
            Snapshot::Axisymmetric(_) => RecordKind::Axisymmetric,
            Snapshot::Spherical(_) => RecordKind::Spherical,
        }
    }

    /// Angular frequency
    pub fn omega(&self) -> f64 {
        match self {
            Snapshot::Axisymmetric(d) => d.record.omega,
            Snapshot::Spherical(d) => d.record.omega,
        }
    }

    /// Self-interaction coefficient
    pub fn lambda(&self) -> f64 {
        match self {
            Snapshot::Axisymmetric(d) => d.record.lambda,
            Snapshot::Spherical(d) => d.record.lambda,
        }
    }

    /// Whether λ came from the file
    pub fn has_lambda(&self) -> bool {
        match self {
            Snapshot::Axisymmetric(d) => d.has_lambda,
            Snapshot::Spherical(d) => d.has_lambda,
        }
    }

    /// Domain decomposition
    pub fn space(&self) -> &F::Domain {
        match self {
            Snapshot::Axisymmetric(d) => &d.record.space,
            Snapshot::Spherical(d) => &d.record.space,
        }
    }

    /// Replace λ, e.g. before re-encoding a converted file
    pub fn set_lambda(&mut self, lambda: f64) {
        match self {
            Snapshot::Axisymmetric(d) => d.record.lambda = lambda,
            Snapshot::Spherical(d) => d.record.lambda = lambda,
        }
    }

    /// Named fields in disk order
    pub fn named_fields(&self) -> Vec<(&'static str, &F)> {
        match self {
            Snapshot::Axisymmetric(d) => AxisymmetricRecord::<F>::FIELD_NAMES
                .into_iter()
                .zip(d.record.fields())
                .collect(),
            Snapshot::Spherical(d) => SphericalRecord::<F>::FIELD_NAMES
                .into_iter()
                .zip(d.record.fields())
                .collect(),
        }
    }
}
