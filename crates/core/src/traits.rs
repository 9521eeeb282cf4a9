//! Collaborator traits for snapshot composites
//!
//! A snapshot holds two kinds of composite blobs with no length prefix: one
//! domain descriptor followed by scalar fields defined over it. The codec never
//! measures or skips them; it hands the stream to these parsers and relies on
//! each one consuming exactly its own bytes.

use std::fmt::Debug;
use std::io::{Read, Write};

use crate::error::Result;

/// Multi-domain spatial decomposition with a self-delimiting wire format
pub trait DomainDescriptor: Clone + Debug + PartialEq {
    /// Parse a descriptor, consuming exactly its serialized bytes
    ///
    /// # Errors
    ///
    /// Returns an error on a short read or when the blob violates the
    /// descriptor's constraints.
    fn parse<R: Read>(reader: &mut R) -> Result<Self>;

    /// Serialize the descriptor; the exact inverse of [`DomainDescriptor::parse`]
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Number of spatial dimensions
    ///
    /// Every scalar header repeats this value, which is what lets a reader
    /// recognise the start of a scalar blob.
    fn dimensionality(&self) -> i32;

    /// Number of domains in the decomposition
    fn domain_count(&self) -> usize;
}

/// Quantity sampled over every domain of a [`DomainDescriptor`]
pub trait ScalarField: Clone + Debug + PartialEq {
    /// Descriptor this field is defined over
    type Domain: DomainDescriptor;

    /// Parse a field defined over `domain`, consuming exactly its serialized bytes
    ///
    /// # Errors
    ///
    /// Returns an error on a short read or when the header does not match `domain`.
    fn parse<R: Read>(reader: &mut R, domain: &Self::Domain) -> Result<Self>;

    /// Serialize the field; the exact inverse of [`ScalarField::parse`]
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write<W: Write>(&self, writer: &mut W) -> Result<()>;
}
