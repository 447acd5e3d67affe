// entroscan-entropy/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod logic;
pub mod statistics;

/// Common type definitions
pub type EntropyScore = f64;
