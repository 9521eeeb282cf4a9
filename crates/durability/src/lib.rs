//! Durability layer for solsnap
//!
//! This crate handles everything that touches snapshot files:
//!
//! - Kind sniffing: axisymmetric or spherical, without a format tag
//! - Decoding with backward compatibility for files written before λ was stored
//! - Crash-safe encoding in the current layout
//! - Fixed-width big-endian primitives with explicit rollback points
//! - Plausibility thresholds configurable through `solsnap.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config; // solsnap.toml and layout thresholds
pub mod error; // SnapshotError
pub mod format; // Fixed-width big-endian primitives
pub mod record; // Record kinds and decoded records
pub mod snapshot; // Sniffer, probe, reader, writer

// === Re-exports ===
pub use config::{
    ConfigError, ProbeConfig, SnapshotConfig, CONFIG_FILE_NAME, DEFAULT_KK_MAX_ABS,
    DEFAULT_LAMBDA_MAX_ABS,
};
pub use error::{SnapshotError, SnapshotResult};
pub use format::{FixedWidthReader, FixedWidthWriter, RollbackPoint};
pub use record::{AxisymmetricRecord, Decoded, RecordKind, Snapshot, SphericalRecord};
pub use snapshot::{
    detect_kind, load_axisymmetric, load_spherical, looks_like_lambda, save_axisymmetric,
    save_spherical, AbsentReason, LambdaProbe, SnapshotInfo, SnapshotReader, SnapshotWriter, Sniffed,
};
