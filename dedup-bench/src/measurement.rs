use std::time::Duration;

/// Timing of one sample size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Number of words in the sample.
    pub size: usize,
    /// Central running time over all runs.
    pub time: Duration,
    /// Number of words left after deduplication.
    pub uniques: usize,
}

impl Measurement {
    #[must_use]
    pub fn nanos(&self) -> u64 {
        u64::try_from(self.time.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Time per word, `t / s`.
    #[must_use]
    pub fn v1(&self) -> u64 {
        self.nanos().checked_div(self.size as u64).unwrap_or(0)
    }

    /// `t / s * u`, integer division first.
    #[must_use]
    pub fn v2(&self) -> u64 {
        self.v1().saturating_mul(self.uniques as u64)
    }

    /// `t / ln(s) * s`. Zero when `s <= 1`, where the logarithm vanishes.
    #[must_use]
    pub fn v3(&self) -> u64 {
        if self.size <= 1 {
            return 0;
        }
        let size = self.size as f64;
        (self.nanos() as f64 / size.ln() * size) as u64
    }

    /// `size,time,v1,v2,v3`
    #[must_use]
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.size,
            self.nanos(),
            self.v1(),
            self.v2(),
            self.v3()
        )
    }
}
