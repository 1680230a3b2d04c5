//! Timing harness for the strategies of `dedup-core`.
//!
//! For every input corpus and strategy, samples of growing size are drawn
//! from the corpus, deduplicated a number of times, and one CSV row per size
//! is written with the central running time and three derived ratios.

mod config;
mod csv;
mod error;
mod measurement;
mod runner;
mod sampler;
mod timing;

pub use crate::{
    config::RunConfig,
    csv::{CsvWriter, HEADER, output_file_name},
    error::{BResult, BenchError},
    measurement::Measurement,
    runner::{WARM_UP_SIZE, run, run_algorithm, warm_up},
    sampler::Sampler,
    timing::{Statistic, fmt_duration, measure},
};
pub use dedup_core::Strategy;
