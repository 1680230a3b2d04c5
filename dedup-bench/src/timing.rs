//! Stopwatch and reduction of repeated timings.

use std::time::{Duration, Instant};

/// Times a single call of `f`.
pub fn measure<T>(f: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let ret = f();
    (start.elapsed(), ret)
}

/// Central tendency used to summarize the runs of one sample size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Statistic {
    Mean,
    #[default]
    Median,
}

impl Statistic {
    /// Reduce `samples` to one duration. Sorts `samples` for the median.
    #[must_use]
    pub fn apply(self, samples: &mut [Duration]) -> Duration {
        if samples.is_empty() {
            return Duration::ZERO;
        }
        match self {
            Statistic::Mean => {
                let total: u128 = samples.iter().map(Duration::as_nanos).sum();
                nanos(total / samples.len() as u128)
            }
            Statistic::Median => {
                samples.sort_unstable();
                let mid = samples.len() / 2;
                if samples.len() % 2 == 1 {
                    samples[mid]
                } else {
                    nanos((samples[mid - 1].as_nanos() + samples[mid].as_nanos()) / 2)
                }
            }
        }
    }
}

fn nanos(n: u128) -> Duration {
    Duration::from_nanos(u64::try_from(n).unwrap_or(u64::MAX))
}

/// Human readable duration with four significant digits.
#[must_use]
pub fn fmt_duration(d: Duration) -> String {
    let d = d.as_secs_f64();
    let inner = |f: f64| format!("{:.*}", (3 - f.log10().floor() as i32).max(0) as usize, f);
    match d {
        1.0.. => format!("{} s", inner(d)),
        1e-3.. => format!("{} ms", inner(d * 1e3)),
        1e-6.. => format!("{} us", inner(d * 1e6)),
        _ => format!("{} ns", (d * 1e9).round()),
    }
}
