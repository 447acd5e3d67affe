//! Per-file entropy classification.
//!
//! `FileClassifier` consumes the block stream of one file, folds each
//! block's Shannon entropy into running statistics, and maps the aggregate
//! into a four-valued verdict. It performs no I/O itself: blocks come from
//! a `BlockReader` and verdicts go to the `ScanCoordinator`.

use log::debug;

use entroscan_entropy::entropy::shannon_entropy;
use entroscan_entropy::logic::FourValued;
use entroscan_entropy::statistics::{BlockStats, EntropyBand};

use crate::config::ScanConfig;

/// One block's measurement, surfaced for display. The band annotation uses
/// the display cut points, not the verdict thresholds.
#[derive(Debug, Clone, Copy)]
pub struct BlockObservation {
    pub index: u64,
    pub len: usize,
    pub entropy: f64,
    pub band: EntropyBand,
}

/// Aggregate statistics of a fully consumed, non-empty block stream.
#[derive(Debug, Clone, Copy)]
pub struct FileSummary {
    pub blocks: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Verdict plus the aggregate that produced it. `summary` is `None` exactly
/// when the stream yielded no blocks, which always classifies as `Neither`.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub verdict: FourValued,
    pub summary: Option<FileSummary>,
}

/// Maps a stream of byte blocks into a `FourValued` verdict.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    config: ScanConfig,
}

impl FileClassifier {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Classifies a block stream, with no per-block reporting.
    pub fn classify<I>(&self, blocks: I) -> Classification
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        self.classify_observed(blocks, |_| {})
    }

    /// Classifies a block stream, invoking `on_block` with each block's
    /// measurement as it is taken. Blocks are processed strictly in stream
    /// order; the running statistics are a plain sequential reduction.
    pub fn classify_observed<I, F>(&self, blocks: I, mut on_block: F) -> Classification
    where
        I: IntoIterator<Item = Vec<u8>>,
        F: FnMut(BlockObservation),
    {
        let bands = self.config.display_bands;
        let mut stats = BlockStats::new();
        let mut index = 0u64;

        for block in blocks {
            if block.is_empty() {
                // Block producers must skip empty reads; tolerate rather
                // than let a zero-length block distort the statistics. The
                // index still advances so it names the stream position.
                debug!("Ignoring empty block {index} in stream");
                index += 1;
                continue;
            }

            let entropy = shannon_entropy(&block);
            stats.record(entropy);

            on_block(BlockObservation {
                index,
                len: block.len(),
                entropy,
                band: EntropyBand::classify(entropy, bands.suspicious, bands.critical),
            });
            index += 1;
        }

        self.verdict_for(stats)
    }

    /// Applies the threshold policy, in priority order, to the aggregate.
    fn verdict_for(&self, stats: BlockStats) -> Classification {
        let (Some(mean), Some(min), Some(max)) = (stats.mean(), stats.min(), stats.max()) else {
            // Zero blocks read: no information was obtained. This is not a
            // benign determination.
            debug!("No blocks read; verdict is Neither");
            return Classification {
                verdict: FourValued::Neither,
                summary: None,
            };
        };

        let t = self.config.thresholds;
        let verdict = if mean > t.avg_critical || max > t.max_critical {
            FourValued::True
        } else if mean >= t.avg_suspicious {
            FourValued::Neither
        } else {
            FourValued::False
        };

        Classification {
            verdict,
            summary: Some(FileSummary {
                blocks: stats.count(),
                mean,
                min,
                max,
            }),
        }
    }
}
