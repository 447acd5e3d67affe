// entroscan/src/cli.rs
//! This file defines the command-line interface (CLI) for the entroscan
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entroscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scan files for statistical signs of encryption or packing",
    long_about = "Entroscan measures the Shannon entropy of file content block by block and classifies each file under a four-valued verdict: definitely benign, definitely suspicious, no information, or contradictory information. Files whose byte distribution resembles compressed or encrypted data can be copied to a quarantine folder for further inspection; the originals are never modified.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'entroscan' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `entroscan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans a directory tree, classifying every file by its entropy profile.
    #[command(about = "Scans a directory tree, classifying every file by its entropy profile.")]
    Scan(ScanCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Root directory to scan.
    #[arg(value_name = "ROOT", help = "Root directory whose files will be scanned.")]
    pub root: PathBuf,

    /// Copy flagged files into this folder.
    #[arg(
        long = "quarantine-dir",
        value_name = "DIR",
        help = "Copy files with a True or Neither verdict into this folder. Without it the scan only reports."
    )]
    pub quarantine_dir: Option<PathBuf>,

    /// Path to a custom scan configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom scan configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Print a line per block with its entropy, band tag and bar.
    #[arg(long = "blocks", help = "Print per-block entropy lines while scanning.")]
    pub blocks: bool,

    /// How to render the final verdict registry.
    #[arg(
        long = "format",
        value_name = "FORMAT",
        value_enum,
        default_value = "table",
        help = "Render the final registry as a table or as JSON."
    )]
    pub format: OutputFormat,
}

/// Registry rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table on stdout.
    Table,
    /// Machine-readable JSON on stdout.
    Json,
}
