//! Configuration management for `entroscan-core`.
//!
//! Defines the tunable constants of a scan: block size, the file-level
//! verdict thresholds, and the per-block display bands. The two threshold
//! families are close in value but independent in role; they are kept as
//! separate structs with separate defaults so one can be tuned without
//! touching the other.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ScanError;

/// Default size of one read block, in bytes. The final block of a file may
/// be shorter.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// File-level verdict thresholds, applied to the aggregate entropy
/// statistics of a whole file (see `FileClassifier`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VerdictThresholds {
    /// Average entropy strictly above this is a definite `True` verdict.
    pub avg_critical: f64,
    /// Maximum block entropy strictly above this is a definite `True`
    /// verdict, even when the average stays low.
    pub max_critical: f64,
    /// Average entropy at or above this (but below the critical cuts)
    /// lands in the ambiguous `Neither` band.
    pub avg_suspicious: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            avg_critical: 7.5,
            max_critical: 7.8,
            avg_suspicious: 6.5,
        }
    }
}

/// Per-block display band cut points. Cosmetic annotations on block output
/// only; the verdict never consults these.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayBands {
    /// Block entropy at or above this renders as suspicious.
    pub suspicious: f64,
    /// Block entropy at or above this renders as critical.
    pub critical: f64,
}

impl Default for DisplayBands {
    fn default() -> Self {
        Self {
            suspicious: 6.5,
            critical: 7.5,
        }
    }
}

/// Full scan configuration. All fields default to the built-in constants,
/// so a partial YAML file overrides only what it names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub block_size: usize,
    pub thresholds: VerdictThresholds,
    pub display_bands: DisplayBands,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            thresholds: VerdictThresholds::default(),
            display_bands: DisplayBands::default(),
        }
    }
}

impl ScanConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ScanError> {
        debug!("Loading scan configuration from {}", path.display());
        let file = File::open(path)
            .map_err(|e| ScanError::ConfigLoad(path.to_path_buf(), e.to_string()))?;
        Self::from_reader(file)
            .map_err(|e| ScanError::ConfigLoad(path.to_path_buf(), e.to_string()))
    }

    /// Deserializes a configuration from any YAML reader.
    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let config: ScanConfig = serde_yaml::from_reader(reader)?;
        Ok(config)
    }
}
