//! Scalar fields over a polar space
//!
//! ## Wire Format
//!
//! ```text
//! [basis flag: i32]   0 = undefined, 1 = standard basis set
//! [ndim: i32]         must equal the space dimensionality
//! [ndom: i32]         must equal the space domain count
//! [values: ndom x points_per_domain x f64]
//! ```
//!
//! The header is the structural signature a snapshot reader can peek for:
//! a flag in {0, 1} immediately followed by the space dimensionality.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::space::PolarSpace;
use crate::traits::{DomainDescriptor, ScalarField};

/// Values decoded per read, so a declared size never allocates ahead of the data.
const READ_CHUNK: usize = 4096;

/// Whether a spectral basis has been assigned to a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisState {
    /// No basis assigned yet
    Undefined,
    /// Standard basis for the space
    Standard,
}

impl BasisState {
    /// Wire flag for this state
    pub fn flag(self) -> i32 {
        match self {
            BasisState::Undefined => 0,
            BasisState::Standard => 1,
        }
    }

    /// State for a wire flag
    pub fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            0 => Some(BasisState::Undefined),
            1 => Some(BasisState::Standard),
            _ => None,
        }
    }
}

/// One value per collocation point of every domain of a [`PolarSpace`]
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    basis: BasisState,
    points_per_domain: usize,
    domains: Vec<Vec<f64>>,
}

impl Scalar {
    /// Scalar filled with zeros and no basis assigned
    pub fn zeros(space: &PolarSpace) -> Self {
        Self::constant(space, 0.0)
    }

    /// Scalar filled with `value` and no basis assigned
    pub fn constant(space: &PolarSpace, value: f64) -> Self {
        Self::from_fn(space, |_, _| value)
    }

    /// Scalar whose value at point `i` of domain `d` is `f(d, i)`
    pub fn from_fn(space: &PolarSpace, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let points = space.points_per_domain();
        let domains = (0..space.domain_count())
            .map(|d| (0..points).map(|i| f(d, i)).collect())
            .collect();
        Scalar {
            basis: BasisState::Undefined,
            points_per_domain: points,
            domains,
        }
    }

    /// Current basis state
    pub fn basis(&self) -> BasisState {
        self.basis
    }

    /// Assign the standard basis
    pub fn set_std_basis(&mut self) {
        self.basis = BasisState::Standard;
    }

    /// Number of domains
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Values of domain `d`
    ///
    /// # Panics
    ///
    /// Panics if `d` is not a valid domain index.
    pub fn domain(&self, d: usize) -> &[f64] {
        &self.domains[d]
    }

    /// Mutable values of domain `d`
    ///
    /// # Panics
    ///
    /// Panics if `d` is not a valid domain index.
    pub fn domain_mut(&mut self, d: usize) -> &mut [f64] {
        &mut self.domains[d]
    }

    /// Largest absolute value over all domains (0 for an empty field)
    pub fn max_abs(&self) -> f64 {
        self.domains
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

impl ScalarField for Scalar {
    type Domain = PolarSpace;

    fn parse<R: Read>(reader: &mut R, space: &PolarSpace) -> Result<Self> {
        let flag = reader.read_i32::<BigEndian>()?;
        let basis = BasisState::from_flag(flag).ok_or(Error::BasisFlag { found: flag })?;

        let ndim = reader.read_i32::<BigEndian>()?;
        if ndim != space.dimensionality() {
            return Err(Error::DimensionMismatch {
                expected: space.dimensionality(),
                found: ndim,
            });
        }

        let ndom = reader.read_i32::<BigEndian>()?;
        if ndom < 0 || ndom as usize != space.domain_count() {
            return Err(Error::DomainCountMismatch {
                expected: space.domain_count(),
                found: ndom,
            });
        }

        let points = space.points_per_domain();
        let mut chunk = vec![0.0; points.min(READ_CHUNK)];
        let mut domains = Vec::with_capacity(space.domain_count());
        for _ in 0..space.domain_count() {
            let mut values = Vec::with_capacity(points.min(READ_CHUNK));
            while values.len() < points {
                let n = (points - values.len()).min(READ_CHUNK);
                reader.read_f64_into::<BigEndian>(&mut chunk[..n])?;
                values.extend_from_slice(&chunk[..n]);
            }
            domains.push(values);
        }

        Ok(Scalar {
            basis,
            points_per_domain: points,
            domains,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<BigEndian>(self.basis.flag())?;
        writer.write_i32::<BigEndian>(crate::space::POLAR_NDIM)?;
        writer.write_i32::<BigEndian>(self.domains.len() as i32)?;
        for values in &self.domains {
            debug_assert_eq!(values.len(), self.points_per_domain);
            for &v in values {
                writer.write_f64::<BigEndian>(v)?;
            }
        }
        Ok(())
    }
}
