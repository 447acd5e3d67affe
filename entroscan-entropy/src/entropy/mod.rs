// entroscan-entropy/src/entropy/mod.rs
use libm::log2;

use crate::EntropyScore;

/// Calculates the Shannon entropy of a byte block.
///
/// Returns the entropy in bits per symbol, in [0, 8] for the 256-symbol
/// byte alphabet. The result depends only on the multiset of byte values,
/// not their order. Empty input yields 0.0, although block producers are
/// expected to skip empty blocks rather than submit them.
pub fn shannon_entropy(block: &[u8]) -> EntropyScore {
    if block.is_empty() {
        return 0.0;
    }

    let mut frequencies = [0usize; 256];
    for &byte in block {
        frequencies[byte as usize] += 1;
    }

    let len = block.len() as f64;
    let mut entropy = 0.0;

    for &count in frequencies.iter() {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}
