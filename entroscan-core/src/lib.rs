// entroscan-core/src/lib.rs
//! # Entroscan Core Library
//!
//! `entroscan-core` provides the decision logic of the entroscan file
//! triage scanner: per-file entropy classification under a four-valued
//! verdict algebra, and the coordination that drives it across a file
//! source, records verdicts, and dispatches flagged files to quarantine.
//!
//! The numeric and logical primitives (Shannon entropy, the Belnap truth
//! domain, running block statistics) live in the `entroscan-entropy` leaf
//! crate; this crate adds thresholds, the collaborator seams, and their
//! filesystem implementations.
//!
//! ## Modules
//!
//! * `config`: Scan thresholds and block size, loadable from YAML.
//! * `classifier`: `FileClassifier`, mapping one file's block stream to a verdict.
//! * `source`: The `FileSource` trait and the recursive `WalkSource`.
//! * `reader`: The `BlockReader` trait and the lazy `FsBlockReader`.
//! * `quarantine`: The `Quarantine` trait and the copying `CopyQuarantine`.
//! * `coordinator`: `ScanCoordinator`, the registry, and scan observers.
//! * `report`: The `ReportSink` trait for rendering a finished scan.
//! * `errors`: The fatal `ScanError` and per-file `QuarantineError` taxonomy.
//!
//! ## Design Principles
//!
//! * **Pluggable collaborators:** discovery, block reading, quarantine and
//!   reporting are traits, so the classifier and coordinator test against
//!   mocks and the CLI swaps in the filesystem implementations.
//! * **Local error absorption:** an unreadable file is a `Neither` verdict
//!   and a failed quarantine is a note on the outcome; only a root that
//!   cannot be enumerated aborts a scan.
//! * **Explicit state:** one `ScanCoordinator` owns one run's registry and
//!   is passed through the call chain; there is no global scan state.

pub mod classifier;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod quarantine;
pub mod reader;
pub mod report;
pub mod source;

/// Re-exports the verdict algebra and block statistics from the leaf crate
/// so consumers need only depend on `entroscan-core`.
pub use entroscan_entropy::entropy::shannon_entropy;
pub use entroscan_entropy::logic::FourValued;
pub use entroscan_entropy::statistics::{BlockStats, EntropyBand};

/// Re-exports the classification types.
pub use classifier::{BlockObservation, Classification, FileClassifier, FileSummary};

/// Re-exports the configuration types.
pub use config::{DisplayBands, ScanConfig, VerdictThresholds, DEFAULT_BLOCK_SIZE};

/// Re-exports the coordination types.
pub use coordinator::{
    NullObserver, QuarantineNote, ScanCoordinator, ScanObserver, ScanOutcome, VerdictRegistry,
};

/// Re-exports the custom error types for clear error reporting.
pub use errors::{QuarantineError, ScanError};

/// Re-exports the collaborator seams and their filesystem implementations.
pub use quarantine::{CopyQuarantine, Quarantine};
pub use reader::{BlockReader, FsBlockReader};
pub use report::{PlainTextReport, ReportSink};
pub use source::{FileSource, WalkSource};
