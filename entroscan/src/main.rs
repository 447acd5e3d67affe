// entroscan/src/main.rs
//! Entroscan entry point.
//!
//! Parses the CLI, configures logging, and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;

use entroscan::cli::{Cli, Commands};
use entroscan::commands::scan::{run_scan, ScanOptions};
use entroscan::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Scan(cmd) => run_scan(ScanOptions::from_command(cmd, args.quiet)),
    }
}
