//! Polar multi-domain decomposition
//!
//! A `PolarSpace` splits the (r, theta) half-plane into `ndom` radial domains:
//! a nucleus around the center, `ndom - 2` shells, and one compactified
//! domain reaching spatial infinity. Every domain shares the same resolution.
//! A single-domain space covers everything with one region.
//!
//! ## Wire Format
//!
//! ```text
//! [ndim: i32 = 2]
//! [ndom: i32 >= 1]
//! [basis type: i32]            1 = Chebyshev, 2 = Legendre
//! [center: ndim x f64]
//! [resolution: ndim x i32]     points per domain along r and theta
//! [bounds: (ndom - 1) x f64]   strictly increasing radii
//! ```
//!
//! All values are big-endian.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::traits::DomainDescriptor;

/// Dimensionality of every polar space
pub const POLAR_NDIM: i32 = 2;

/// Upper bound on domains accepted from a stream
const MAX_DOMAINS: i32 = 1024;

/// Upper bound on points per axis accepted from a stream
const MAX_POINTS_PER_AXIS: i32 = 4096;

/// Spectral basis used for collocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralBasis {
    /// Chebyshev polynomials
    Chebyshev,
    /// Legendre polynomials
    Legendre,
}

impl SpectralBasis {
    /// Wire tag for this basis
    pub fn tag(self) -> i32 {
        match self {
            SpectralBasis::Chebyshev => 1,
            SpectralBasis::Legendre => 2,
        }
    }

    /// Basis for a wire tag
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(SpectralBasis::Chebyshev),
            2 => Some(SpectralBasis::Legendre),
            _ => None,
        }
    }
}

/// Polar (r, theta) multi-domain decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSpace {
    basis: SpectralBasis,
    center: [f64; 2],
    resolution: [i32; 2],
    bounds: Vec<f64>,
}

impl PolarSpace {
    /// Build a space from its collocation parameters
    ///
    /// `bounds` holds the `ndom - 1` radii separating consecutive domains, so
    /// one bound yields a nucleus plus a compactified domain and no bounds
    /// yield a single domain.
    ///
    /// # Errors
    ///
    /// Returns an error if a resolution entry is below one, if there are too
    /// many domains, or if the bounds are not finite, positive, and strictly
    /// increasing.
    pub fn new(
        basis: SpectralBasis,
        center: [f64; 2],
        resolution: [i32; 2],
        bounds: Vec<f64>,
    ) -> Result<Self> {
        for (axis, &points) in resolution.iter().enumerate() {
            if !(1..=MAX_POINTS_PER_AXIS).contains(&points) {
                return Err(Error::InvalidResolution { axis, points });
            }
        }
        if bounds.len() >= MAX_DOMAINS as usize {
            return Err(Error::InvalidDomainCount(bounds.len() as i32 + 1));
        }
        validate_bounds(&bounds)?;
        Ok(PolarSpace {
            basis,
            center,
            resolution,
            bounds,
        })
    }

    /// Spectral basis type
    pub fn basis(&self) -> SpectralBasis {
        self.basis
    }

    /// Center point
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Points per domain along r and theta
    pub fn resolution(&self) -> [i32; 2] {
        self.resolution
    }

    /// Radii separating consecutive domains
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Collocation points in each domain
    pub fn points_per_domain(&self) -> usize {
        self.resolution.iter().map(|&n| n as usize).product()
    }

    /// Inner radius of domain `d` (0 for the nucleus)
    ///
    /// # Panics
    ///
    /// Panics if `d` is not a valid domain index.
    pub fn inner_radius(&self, d: usize) -> f64 {
        assert!(d < self.domain_count(), "domain index {d} out of range");
        if d == 0 {
            0.0
        } else {
            self.bounds[d - 1]
        }
    }

    /// Outer radius of domain `d` (infinite for the compactified domain)
    ///
    /// # Panics
    ///
    /// Panics if `d` is not a valid domain index.
    pub fn outer_radius(&self, d: usize) -> f64 {
        assert!(d < self.domain_count(), "domain index {d} out of range");
        self.bounds.get(d).copied().unwrap_or(f64::INFINITY)
    }
}

fn validate_bounds(bounds: &[f64]) -> Result<()> {
    let mut previous = 0.0;
    for (i, &b) in bounds.iter().enumerate() {
        if !b.is_finite() || b <= previous {
            return Err(Error::InvalidBounds(format!(
                "bound {i} = {b} must be finite and greater than {previous}"
            )));
        }
        previous = b;
    }
    Ok(())
}

impl DomainDescriptor for PolarSpace {
    fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let ndim = reader.read_i32::<BigEndian>()?;
        if ndim != POLAR_NDIM {
            return Err(Error::InvalidDimension(ndim));
        }
        let ndom = reader.read_i32::<BigEndian>()?;
        if !(1..=MAX_DOMAINS).contains(&ndom) {
            return Err(Error::InvalidDomainCount(ndom));
        }
        let tag = reader.read_i32::<BigEndian>()?;
        let basis = SpectralBasis::from_tag(tag).ok_or(Error::InvalidSpectralBasis(tag))?;

        let center = [reader.read_f64::<BigEndian>()?, reader.read_f64::<BigEndian>()?];
        let resolution = [reader.read_i32::<BigEndian>()?, reader.read_i32::<BigEndian>()?];

        let mut bounds = Vec::with_capacity((ndom - 1) as usize);
        for _ in 1..ndom {
            bounds.push(reader.read_f64::<BigEndian>()?);
        }

        PolarSpace::new(basis, center, resolution, bounds)
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<BigEndian>(POLAR_NDIM)?;
        writer.write_i32::<BigEndian>(self.domain_count() as i32)?;
        writer.write_i32::<BigEndian>(self.basis.tag())?;
        for c in self.center {
            writer.write_f64::<BigEndian>(c)?;
        }
        for n in self.resolution {
            writer.write_i32::<BigEndian>(n)?;
        }
        for &b in &self.bounds {
            writer.write_f64::<BigEndian>(b)?;
        }
        Ok(())
    }

    fn dimensionality(&self) -> i32 {
        POLAR_NDIM
    }

    fn domain_count(&self) -> usize {
        self.bounds.len() + 1
    }
}
