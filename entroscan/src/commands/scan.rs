// entroscan/src/commands/scan.rs
//! Scan command implementation: wires the filesystem collaborators to the
//! coordinator and renders progress and the final registry.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use entroscan_core::{
    BlockObservation, CopyQuarantine, FileClassifier, FileSummary, FourValued, FsBlockReader,
    Quarantine, QuarantineError, ReportSink, ScanConfig, ScanCoordinator, ScanObserver,
    ScanOutcome, WalkSource,
};

use crate::cli::{OutputFormat, ScanCommand};
use crate::ui::summary;

/// Options for the ergonomic run_scan API.
pub struct ScanOptions {
    pub root: PathBuf,
    pub quarantine_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub show_blocks: bool,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl ScanOptions {
    pub fn from_command(cmd: ScanCommand, quiet: bool) -> Self {
        Self {
            root: cmd.root,
            quarantine_dir: cmd.quarantine_dir,
            config_path: cmd.config,
            show_blocks: cmd.blocks,
            format: cmd.format,
            quiet,
        }
    }
}

/// The main operation runner for the entroscan CLI.
///
/// Progress and per-file summaries go to stderr; the final registry goes
/// to stdout in the requested format. Per-file failures never fail the
/// command; only an unreadable scan root does.
pub fn run_scan(opts: ScanOptions) -> Result<()> {
    info!("Starting entroscan scan of {}", opts.root.display());

    let config = load_config(&opts)?;
    debug!(
        "Thresholds: avg_critical={}, max_critical={}, avg_suspicious={}",
        config.thresholds.avg_critical,
        config.thresholds.max_critical,
        config.thresholds.avg_suspicious
    );

    let reader = FsBlockReader::new(config.block_size);
    let quarantine = opts.quarantine_dir.as_ref().map(CopyQuarantine::new);
    let coordinator = ScanCoordinator::new(
        FileClassifier::new(config),
        &reader,
        quarantine.as_ref().map(|q| q as &dyn Quarantine),
    );

    let mut observer = CliObserver {
        show_blocks: opts.show_blocks,
        quiet: opts.quiet,
        colored: io::stderr().is_terminal(),
    };

    let outcome = coordinator
        .run(&WalkSource::new(&opts.root), &mut observer)
        .with_context(|| format!("Scan of {} failed", opts.root.display()))?;

    render_registry(&opts, &outcome)?;

    info!(
        "Scan completed: {} file(s), {} quarantine attempt(s), {} failure(s)",
        outcome.registry.len(),
        outcome.quarantine_attempts(),
        outcome.quarantine_failures()
    );
    Ok(())
}

fn load_config(opts: &ScanOptions) -> Result<ScanConfig> {
    match &opts.config_path {
        Some(path) => ScanConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => Ok(ScanConfig::default()),
    }
}

fn render_registry(opts: &ScanOptions, outcome: &ScanOutcome) -> Result<()> {
    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let writer = stdout.lock();

    let mut sink: Box<dyn ReportSink> = match opts.format {
        OutputFormat::Table => Box::new(summary::TableReport::new(writer, colored)),
        OutputFormat::Json => Box::new(summary::JsonReport::new(writer)),
    };
    sink.report(outcome)
}

/// Streams per-block lines and per-file summaries to stderr as the scan
/// progresses.
struct CliObserver {
    show_blocks: bool,
    quiet: bool,
    colored: bool,
}

impl ScanObserver for CliObserver {
    fn on_file_start(&mut self, file: &Path) {
        if self.show_blocks && !self.quiet {
            eprintln!("\n=== Entropy Analysis: {} ===", file.display());
        }
    }

    fn on_block(&mut self, _file: &Path, observation: &BlockObservation) {
        if self.show_blocks && !self.quiet {
            let _ = summary::write_block_line(&mut io::stderr(), observation, self.colored);
        }
    }

    fn on_file_done(&mut self, file: &Path, verdict: FourValued, stats: Option<&FileSummary>) {
        if !self.quiet {
            let _ =
                summary::write_file_summary(&mut io::stderr(), file, verdict, stats, self.colored);
        }
    }

    fn on_quarantine(&mut self, file: &Path, result: &Result<PathBuf, QuarantineError>) {
        if self.quiet {
            return;
        }
        match result {
            Ok(dest) => eprintln!("[+] Copied {} to {}", file.display(), dest.display()),
            Err(e) => eprintln!("[-] Quarantine of {} failed: {e}", file.display()),
        }
    }
}
