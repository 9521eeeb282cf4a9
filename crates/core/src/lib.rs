//! Core types and traits for solsnap
//!
//! This crate defines the collaborator model the snapshot codec is built on:
//! - DomainDescriptor: a self-delimiting multi-domain spatial decomposition
//! - ScalarField: a self-delimiting quantity sampled over every domain
//! - PolarSpace: polar (r, theta) decomposition (nucleus, shells, compactified domain)
//! - Scalar: one value per collocation point of a PolarSpace
//! - Error: Error type for parsing and building the model types
//!
//! Both wire formats are big-endian and carry no length prefix. A parser
//! consumes exactly its own bytes and a writer is its exact inverse, so a
//! snapshot can chain blobs back to back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;
pub mod space;
pub mod traits;

pub use error::{Error, Result};
pub use scalar::{BasisState, Scalar};
pub use space::{PolarSpace, SpectralBasis, POLAR_NDIM};
pub use traits::{DomainDescriptor, ScalarField};
