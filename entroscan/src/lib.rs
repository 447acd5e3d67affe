// entroscan/src/lib.rs
//! # Entroscan CLI Application
//!
//! This crate provides the command-line interface for the entroscan
//! entropy triage engine: argument parsing, logging setup, and the
//! rendering of per-block output and the final verdict registry.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
