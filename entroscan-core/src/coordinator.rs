//! Scan coordination: driving the classifier across a file source.
//!
//! One `ScanCoordinator` instance owns the state of one scan run and is
//! passed explicitly through the call chain; there is no ambient global
//! registry. Per-file failures are absorbed here so a scan always produces
//! a best-effort registry covering every file it could enumerate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use entroscan_entropy::logic::FourValued;

use crate::classifier::{BlockObservation, FileClassifier, FileSummary};
use crate::errors::{QuarantineError, ScanError};
use crate::quarantine::Quarantine;
use crate::reader::BlockReader;
use crate::source::FileSource;

/// The per-scan registry: one immutable verdict per scanned file.
pub type VerdictRegistry = HashMap<PathBuf, FourValued>;

/// Record of one quarantine attempt, successful or not.
#[derive(Debug)]
pub struct QuarantineNote {
    pub file: PathBuf,
    pub result: Result<PathBuf, QuarantineError>,
}

/// Everything a completed scan run produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub registry: VerdictRegistry,
    pub quarantine_notes: Vec<QuarantineNote>,
}

impl ScanOutcome {
    /// Number of verdicts that triggered a quarantine attempt.
    pub fn quarantine_attempts(&self) -> usize {
        self.quarantine_notes.len()
    }

    /// Number of quarantine attempts that failed.
    pub fn quarantine_failures(&self) -> usize {
        self.quarantine_notes
            .iter()
            .filter(|n| n.result.is_err())
            .count()
    }
}

/// Progress events of a scan run, for rendering. All methods default to
/// no-ops so callers implement only what they display.
pub trait ScanObserver {
    fn on_file_start(&mut self, _file: &Path) {}
    fn on_block(&mut self, _file: &Path, _observation: &BlockObservation) {}
    fn on_file_done(&mut self, _file: &Path, _verdict: FourValued, _summary: Option<&FileSummary>) {
    }
    fn on_quarantine(&mut self, _file: &Path, _result: &Result<PathBuf, QuarantineError>) {}
}

/// Observer that renders nothing.
pub struct NullObserver;

impl ScanObserver for NullObserver {}

/// Drives the classifier across the files of one source, records verdicts,
/// and dispatches flagged files to the quarantine collaborator.
pub struct ScanCoordinator<'a> {
    classifier: FileClassifier,
    reader: &'a dyn BlockReader,
    quarantine: Option<&'a dyn Quarantine>,
}

impl<'a> ScanCoordinator<'a> {
    pub fn new(
        classifier: FileClassifier,
        reader: &'a dyn BlockReader,
        quarantine: Option<&'a dyn Quarantine>,
    ) -> Self {
        Self {
            classifier,
            reader,
            quarantine,
        }
    }

    /// Runs one scan to completion.
    ///
    /// Only root enumeration can fail; every per-file error is folded into
    /// that file's verdict or its quarantine note.
    pub fn run(
        &self,
        source: &dyn FileSource,
        observer: &mut dyn ScanObserver,
    ) -> Result<ScanOutcome, ScanError> {
        let files = source.files()?;
        info!("Scanning {} file(s)", files.len());

        let mut outcome = ScanOutcome::default();

        for file in files {
            observer.on_file_start(&file);

            let blocks = self.reader.open(&file);
            let classification = self
                .classifier
                .classify_observed(blocks, |obs| observer.on_block(&file, &obs));

            debug!(
                "Verdict for {}: {}",
                file.display(),
                classification.verdict
            );
            observer.on_file_done(
                &file,
                classification.verdict,
                classification.summary.as_ref(),
            );

            // True (high entropy) and Neither (no information) both warrant
            // holding the file for review; False and Both do not.
            if matches!(
                classification.verdict,
                FourValued::True | FourValued::Neither
            ) {
                self.dispatch_quarantine(&file, &mut outcome, observer);
            }

            outcome.registry.insert(file, classification.verdict);
        }

        Ok(outcome)
    }

    fn dispatch_quarantine(
        &self,
        file: &Path,
        outcome: &mut ScanOutcome,
        observer: &mut dyn ScanObserver,
    ) {
        let Some(quarantine) = self.quarantine else {
            return;
        };

        let result = quarantine.quarantine(file);
        if let Err(e) = &result {
            warn!("Quarantine of {} failed: {e}", file.display());
        }
        observer.on_quarantine(file, &result);
        outcome.quarantine_notes.push(QuarantineNote {
            file: file.to_path_buf(),
            result,
        });
    }
}
