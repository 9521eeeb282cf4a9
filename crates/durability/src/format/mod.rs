//! On-disk byte formats for solution snapshots.
//!
//! Snapshots have no magic number and no version field. The only shared
//! primitive is a fixed-width big-endian scalar reader/writer; composites are
//! delegated to the collaborator parsers in `solsnap_core`.
//!
//! # Module Structure
//!
//! - `primitives`: Fixed-width big-endian reads and writes with explicit rollback points

pub mod primitives;

pub use primitives::{FixedWidthReader, FixedWidthWriter, RollbackPoint};
