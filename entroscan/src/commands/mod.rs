// entroscan/src/commands/mod.rs
pub mod scan;
