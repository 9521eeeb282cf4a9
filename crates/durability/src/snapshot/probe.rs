//! Optional λ detection
//!
//! Files from older writers go straight from ω to the first scalar field;
//! current files put λ in between. Nothing on disk says which, so the reader
//! speculatively reads eight bytes as λ and accepts them only if two gates
//! agree:
//!
//! 1. Value range: finite, and |λ| below the configured bound.
//! 2. Structure: the next two `i32`s look like a scalar header, a basis flag
//!    in {0, 1} followed by the space dimensionality.
//!
//! A value-range pass with a failed structural peek still rolls back.

use std::io::{self, Read, Seek};

use crate::config::ProbeConfig;
use crate::format::FixedWidthReader;

/// Why a speculative λ was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsentReason {
    /// Fewer than eight bytes remained after ω
    Truncated,
    /// The bytes decode to a non-finite or out-of-range value
    Implausible(f64),
    /// The value was plausible but the bytes after it are not a scalar header
    HeaderMismatch {
        /// First peeked `i32` (`None` if the stream ended)
        basis_flag: Option<i32>,
        /// Second peeked `i32` (`None` if the stream ended)
        ndim: Option<i32>,
    },
}

/// Outcome of probing for λ
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LambdaProbe {
    /// λ is stored; the stream sits just after it
    Present(f64),
    /// λ is not stored; the stream sits at the rollback point
    Absent(AbsentReason),
}

impl LambdaProbe {
    /// The stored λ, if any
    pub fn value(self) -> Option<f64> {
        match self {
            LambdaProbe::Present(v) => Some(v),
            LambdaProbe::Absent(_) => None,
        }
    }
}

/// Value-range gate: finite and strictly inside `±lambda_max_abs`
pub fn looks_like_lambda(value: f64, config: &ProbeConfig) -> bool {
    value.is_finite() && value.abs() < config.lambda_max_abs
}

/// Probe for an optional λ at the current stream position
///
/// `ndim` is the dimensionality of the already parsed domain descriptor.
/// On [`LambdaProbe::Present`] the stream is positioned immediately after the
/// λ bytes; on [`LambdaProbe::Absent`] it is back where it started, so the
/// bytes are reread as the first scalar header.
///
/// # Errors
///
/// Returns an error only for I/O failures other than a short read.
pub fn probe_lambda<R: Read + Seek>(
    reader: &mut FixedWidthReader<R>,
    ndim: i32,
    config: &ProbeConfig,
) -> io::Result<LambdaProbe> {
    let rollback = reader.checkpoint()?;

    let candidate = match reader.try_read_f64()? {
        Some(v) => v,
        None => {
            reader.rewind(rollback)?;
            return Ok(LambdaProbe::Absent(AbsentReason::Truncated));
        }
    };
    if !looks_like_lambda(candidate, config) {
        reader.rewind(rollback)?;
        return Ok(LambdaProbe::Absent(AbsentReason::Implausible(candidate)));
    }

    let after_lambda = reader.checkpoint()?;
    let basis_flag = reader.try_read_i32()?;
    let peeked_ndim = match basis_flag {
        Some(_) => reader.try_read_i32()?,
        None => None,
    };

    let header_ok = matches!(basis_flag, Some(0 | 1)) && peeked_ndim == Some(ndim);
    if header_ok {
        reader.rewind(after_lambda)?;
        Ok(LambdaProbe::Present(candidate))
    } else {
        reader.rewind(rollback)?;
        Ok(LambdaProbe::Absent(AbsentReason::HeaderMismatch {
            basis_flag,
            ndim: peeked_ndim,
        }))
    }
}
