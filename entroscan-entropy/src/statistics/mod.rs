// entroscan-entropy/src/statistics/mod.rs
use crate::EntropyScore;

/// Running statistics over the block entropies of a single file.
///
/// This is a plain reduction: sum, count, minimum and maximum. No per-block
/// history is retained beyond these running values.
#[derive(Debug, Clone, Copy)]
pub struct BlockStats {
    sum: f64,
    count: u64,
    min: f64,
    max: f64,
}

impl Default for BlockStats {
    fn default() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl BlockStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one block entropy into the running values.
    pub fn record(&mut self, entropy: EntropyScore) {
        self.sum += entropy;
        self.count += 1;
        if entropy < self.min {
            self.min = entropy;
        }
        if entropy > self.max {
            self.max = entropy;
        }
    }

    /// Number of blocks recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean of recorded entropies, or `None` before any block.
    pub fn mean(&self) -> Option<EntropyScore> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Smallest entropy seen, or `None` before any block.
    pub fn min(&self) -> Option<EntropyScore> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest entropy seen, or `None` before any block.
    pub fn max(&self) -> Option<EntropyScore> {
        (self.count > 0).then_some(self.max)
    }
}

/// Display band for a single block's entropy. Informational only: bands
/// annotate per-block output and never feed the file-level verdict, which
/// uses its own cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBand {
    Normal,
    Suspicious,
    Critical,
}

impl EntropyBand {
    /// Classifies one block entropy against the given band cut points.
    pub fn classify(entropy: EntropyScore, suspicious: f64, critical: f64) -> EntropyBand {
        if entropy < suspicious {
            EntropyBand::Normal
        } else if entropy < critical {
            EntropyBand::Suspicious
        } else {
            EntropyBand::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_stats_empty() {
        let stats = BlockStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
    }

    #[test]
    fn test_stats_single_value() {
        let mut stats = BlockStats::new();
        stats.record(5.0);
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.mean(), Some(5.0));
        assert_eq!(stats.min(), Some(5.0));
        assert_eq!(stats.max(), Some(5.0));
    }

    #[test]
    fn test_stats_running_reduction() {
        let mut stats = BlockStats::new();
        for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.record(value);
        }
        assert_eq!(stats.count(), 8);
        assert!((stats.mean().unwrap() - 5.0).abs() < EPSILON);
        assert_eq!(stats.min(), Some(2.0));
        assert_eq!(stats.max(), Some(9.0));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(EntropyBand::classify(0.0, 6.5, 7.5), EntropyBand::Normal);
        assert_eq!(EntropyBand::classify(6.4999, 6.5, 7.5), EntropyBand::Normal);
        // Lower bound of a band is inclusive.
        assert_eq!(EntropyBand::classify(6.5, 6.5, 7.5), EntropyBand::Suspicious);
        assert_eq!(EntropyBand::classify(7.4999, 6.5, 7.5), EntropyBand::Suspicious);
        assert_eq!(EntropyBand::classify(7.5, 6.5, 7.5), EntropyBand::Critical);
        assert_eq!(EntropyBand::classify(8.0, 6.5, 7.5), EntropyBand::Critical);
    }
}
