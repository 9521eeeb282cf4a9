//! Subcommand execution.
//!
//! Each action returns a serializable report; rendering is left to
//! [`crate::format`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use solsnap_core::{DomainDescriptor, Scalar};
use solsnap_durability::{
    looks_like_lambda, RecordKind, Snapshot, SnapshotConfig, SnapshotReader, SnapshotWriter,
    CONFIG_FILE_NAME,
};
use tracing::{info, warn};

/// Where a reported λ came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LambdaSource {
    /// Stored in the file
    File,
    /// Not stored; the configured default was used
    Assumed,
    /// Given on the command line
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectReport {
    pub path: PathBuf,
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kk: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub name: &'static str,
    pub max_abs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kk: Option<i32>,
    pub omega: f64,
    pub lambda: f64,
    pub lambda_source: LambdaSource,
    pub domains: usize,
    pub dimensions: i32,
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: RecordKind,
    pub lambda: f64,
    pub lambda_source: LambdaSource,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitReport {
    pub path: PathBuf,
    pub created: bool,
}

fn reader(config: &SnapshotConfig) -> SnapshotReader<Scalar> {
    SnapshotReader::new(config.probe)
}

pub fn detect(config: &SnapshotConfig, file: &Path) -> Result<DetectReport> {
    let sniffed = reader(config)
        .detect_kind(file)
        .with_context(|| format!("Failed to detect layout of {}", file.display()))?;
    Ok(DetectReport {
        path: file.to_path_buf(),
        kind: sniffed.kind,
        kk: sniffed.kk_guess,
    })
}

pub fn inspect(config: &SnapshotConfig, file: &Path) -> Result<InspectReport> {
    let snapshot = reader(config)
        .load(file, config.lambda_default)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    let kk = match &snapshot {
        Snapshot::Axisymmetric(d) => Some(d.record.kk),
        Snapshot::Spherical(_) => None,
    };
    let space = snapshot.space();
    Ok(InspectReport {
        path: file.to_path_buf(),
        kind: snapshot.kind(),
        kk,
        omega: snapshot.omega(),
        lambda: snapshot.lambda(),
        lambda_source: if snapshot.has_lambda() {
            LambdaSource::File
        } else {
            LambdaSource::Assumed
        },
        domains: space.domain_count(),
        dimensions: space.dimensionality(),
        fields: snapshot
            .named_fields()
            .into_iter()
            .map(|(name, field)| FieldSummary {
                name,
                max_abs: field.max_abs(),
            })
            .collect(),
    })
}

/// Decode `input` in either layout and rewrite it to `output` with λ stored.
///
/// λ precedence: `lambda_override`, then the stored value, then
/// `config.lambda_default`. An override the reader would not recognize as λ
/// (non-finite, or not below `config.probe.lambda_max_abs`) is rejected
/// before anything is written.
pub fn convert(
    config: &SnapshotConfig,
    input: &Path,
    output: &Path,
    lambda_override: Option<f64>,
) -> Result<ConvertReport> {
    let mut snapshot = reader(config)
        .load(input, config.lambda_default)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    let lambda_source = match lambda_override {
        Some(lambda) => {
            anyhow::ensure!(
                looks_like_lambda(lambda, &config.probe),
                "λ override {} is unreadable: it must be finite with |λ| < {}",
                lambda,
                config.probe.lambda_max_abs
            );
            if snapshot.has_lambda() && snapshot.lambda() != lambda {
                warn!(
                    input = %input.display(),
                    stored = snapshot.lambda(),
                    lambda,
                    "Overriding stored lambda"
                );
            }
            snapshot.set_lambda(lambda);
            LambdaSource::Override
        }
        None if snapshot.has_lambda() => LambdaSource::File,
        None => LambdaSource::Assumed,
    };

    let writer = SnapshotWriter::new();
    let written = match &snapshot {
        Snapshot::Axisymmetric(d) => writer.save_axisymmetric(output, &d.record),
        Snapshot::Spherical(d) => writer.save_spherical(output, &d.record),
    }
    .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        kind = %written.kind,
        lambda = snapshot.lambda(),
        source = ?lambda_source,
        "Converted snapshot"
    );
    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: written.path,
        kind: written.kind,
        lambda: snapshot.lambda(),
        lambda_source,
        size: written.size,
    })
}

pub fn init(path: Option<&Path>) -> Result<InitReport> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
    let existed = path.exists();
    SnapshotConfig::write_default_if_missing(path)?;
    Ok(InitReport {
        path: path.to_path_buf(),
        created: !existed,
    })
}
