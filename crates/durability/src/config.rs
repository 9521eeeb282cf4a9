//! Snapshot codec configuration via `solsnap.toml`
//!
//! The kind sniffer and the λ probe both rely on empirical plausibility
//! thresholds rather than a format tag. They live here so they can be tuned
//! per data set without touching the codec.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "solsnap.toml";

/// Largest |kk| classified as an axisymmetric azimuthal index.
pub const DEFAULT_KK_MAX_ABS: i32 = 32;

/// Exclusive upper bound on |λ| for a plausible self-interaction coefficient.
pub const DEFAULT_LAMBDA_MAX_ABS: f64 = 1e3;

/// Plausibility thresholds used to disambiguate record layouts.
///
/// Both are guards against the data seen so far, not format invariants. An
/// axisymmetric file with |kk| above `kk_max_abs`, or a legitimate λ at or
/// above `lambda_max_abs`, will be misread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Largest |kk| the sniffer accepts as an azimuthal index.
    #[serde(default = "default_kk_max_abs")]
    pub kk_max_abs: i32,
    /// Exclusive bound on |λ| for the value-range gate.
    #[serde(default = "default_lambda_max_abs")]
    pub lambda_max_abs: f64,
}

fn default_kk_max_abs() -> i32 {
    DEFAULT_KK_MAX_ABS
}

fn default_lambda_max_abs() -> f64 {
    DEFAULT_LAMBDA_MAX_ABS
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            kk_max_abs: DEFAULT_KK_MAX_ABS,
            lambda_max_abs: DEFAULT_LAMBDA_MAX_ABS,
        }
    }
}

impl ProbeConfig {
    /// Check that the thresholds can classify anything at all.
    ///
    /// # Errors
    ///
    /// Returns an error if `kk_max_abs` is negative or `lambda_max_abs` is
    /// not a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kk_max_abs < 0 {
            return Err(ConfigError::Invalid(format!(
                "kk_max_abs must be non-negative, got {}",
                self.kk_max_abs
            )));
        }
        if !self.lambda_max_abs.is_finite() || self.lambda_max_abs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "lambda_max_abs must be finite and positive, got {}",
                self.lambda_max_abs
            )));
        }
        Ok(())
    }
}

/// Codec configuration loaded from `solsnap.toml`.
///
/// # Example
///
/// ```toml
/// # λ assumed for files written before λ was stored
/// lambda_default = 0.0
///
/// [probe]
/// kk_max_abs = 32
/// lambda_max_abs = 1000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// λ assumed when a file carries none.
    #[serde(default)]
    pub lambda_default: f64,
    /// Layout disambiguation thresholds.
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            lambda_default: 0.0,
            probe: ProbeConfig::default(),
        }
    }
}

impl SnapshotConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# solsnap configuration
#
# λ assumed for files written before the self-interaction coefficient
# was stored alongside omega.
lambda_default = 0.0

[probe]
# Largest |kk| read after the domain header that still counts as an
# axisymmetric azimuthal index. Anything larger is treated as the leading
# bytes of a spherical omega.
kk_max_abs = 32

# Exclusive upper bound on |lambda| for the optional-field probe.
lambda_max_abs = 1000.0
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// thresholds are invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SnapshotConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.probe.validate()?;
        if !config.lambda_default.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "lambda_default must be finite, got {}",
                config.lambda_default
            )));
        }
        Ok(config)
    }

    /// Load `path` when given, else `solsnap.toml` in the working directory
    /// when present, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Config file could not be written
    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// Config values are out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
