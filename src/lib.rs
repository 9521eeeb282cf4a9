//! solsnap - snapshot codec for polar multi-domain solutions
//!
//! A snapshot stores one solved configuration: the domain decomposition, the
//! scalar parameters (azimuthal index, ω, λ), and the solved fields. Two
//! layouts exist, axisymmetric and spherical, and older writers omitted λ.
//! None of this is tagged on disk, so reading starts by sniffing.
//!
//! # Quick Start
//!
//! ```ignore
//! use solsnap::{Scalar, Snapshot, SnapshotReader};
//!
//! let reader = SnapshotReader::<Scalar>::default();
//! match reader.load(path, 0.0)? {
//!     Snapshot::Axisymmetric(d) => println!("kk = {}", d.record.kk),
//!     Snapshot::Spherical(d) => println!("omega = {}", d.record.omega),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`solsnap_core`] holds the collaborator model: `PolarSpace`, `Scalar`,
//!   and the `DomainDescriptor` / `ScalarField` traits they implement.
//! - [`solsnap_durability`] holds the codec: sniffer, λ probe, reader, writer.

pub use solsnap_core::{
    BasisState, DomainDescriptor, PolarSpace, Scalar, ScalarField, SpectralBasis, POLAR_NDIM,
};
pub use solsnap_durability::*;
