//! errors.rs - Custom error types for the entroscan-core library.
//!
//! This module defines structured error enums for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents the fatal error types of a scan run.
///
/// Per-file failures never surface here: an unreadable file folds into a
/// `Neither` verdict and a failed quarantine is recorded on the outcome.
/// Only failures that prevent the scan from starting are fatal.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    #[error("Cannot read scan root '{0}': {1}")]
    RootUnreadable(PathBuf, #[source] std::io::Error),

    #[error("Failed to load scan configuration from '{0}': {1}")]
    ConfigLoad(PathBuf, String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

/// Specific failure reasons for a quarantine attempt. These are per-file
/// and never abort the scan of remaining files.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QuarantineError {
    #[error("'{0}' already exists in the quarantine folder")]
    AlreadyExists(PathBuf),

    #[error("Failed to create quarantine folder '{0}': {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Source path '{0}' has no file name to quarantine under")]
    NoFileName(PathBuf),

    #[error("Failed to copy '{src}' to '{dest}': {source}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
