use crate::{BResult, BenchError, Statistic};
use std::path::PathBuf;

/// Range of sample sizes and how each size is measured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Smallest sample size.
    pub lo: usize,
    /// Largest sample size, inclusive.
    pub hi: usize,
    /// Number of sample sizes between `lo` and `hi`.
    pub levels: usize,
    pub runs_per_sample_size: usize,
    pub statistic: Statistic,
    /// Run a throwaway deduplication before measuring anything.
    pub warm_up: bool,
    /// Check every result with [`dedup_core::is_correct_dedup`].
    pub verify: bool,
    pub seed: u64,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lo: 1,
            hi: 10_000,
            levels: 100,
            runs_per_sample_size: 10,
            statistic: Statistic::Median,
            warm_up: true,
            verify: false,
            seed: 0x5eed,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> BResult<()> {
        let invalid = |msg: String| Err(BenchError::InvalidConfig(msg));
        if self.lo == 0 {
            return invalid("smallest sample size must be at least 1".to_owned());
        }
        if self.hi < self.lo {
            return invalid(format!("hi ({}) is less than lo ({})", self.hi, self.lo));
        }
        if self.levels < 2 {
            return invalid(format!("need at least 2 levels, got {}", self.levels));
        }
        if self.runs_per_sample_size == 0 {
            return invalid("need at least 1 run per sample size".to_owned());
        }
        Ok(())
    }

    /// Distance between consecutive sample sizes. Never zero, even for a
    /// configuration that fails [`Self::validate`].
    #[must_use]
    pub fn step(&self) -> usize {
        let span = self.hi.saturating_sub(self.lo);
        if span < self.levels {
            1
        } else {
            (span / self.levels.saturating_sub(1).max(1)).max(1)
        }
    }

    pub fn sample_sizes(&self) -> impl Iterator<Item = usize> + use<> {
        (self.lo..=self.hi).step_by(self.step())
    }
}
