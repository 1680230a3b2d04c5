//! Runs strategies over growing samples and records the timings.

use crate::{BResult, BenchError, CsvWriter, Measurement, RunConfig, Sampler, fmt_duration, measure};
use dedup_core::{Strategy, is_correct_dedup};
use itertools::Itertools as _;
use std::{hint::black_box, io::Write, path::PathBuf, time::Duration};

/// Length of the dummy input used by [`warm_up`].
pub const WARM_UP_SIZE: usize = 1000;

/// Deduplicates a dummy input where every number appears twice, so that
/// first-use costs are paid before anything is measured.
pub fn warm_up(strategy: Strategy) -> Duration {
    let dummy = warm_up_input();
    let (elapsed, uniques) = measure(|| black_box(strategy.dedup(black_box(&dummy))).len());
    tracing::debug!(
        "warm-up {strategy}: {uniques} uniques in {}",
        fmt_duration(elapsed)
    );
    elapsed
}

fn warm_up_input() -> Vec<String> {
    (0..WARM_UP_SIZE).map(|i| (i - i % 2).to_string()).collect()
}

/// Measures `strategy` on every sample size of `config`, writing one row per
/// size to `out`.
pub fn run_algorithm<W: Write>(
    config: &RunConfig,
    sampler: &mut Sampler,
    strategy: Strategy,
    out: &mut CsvWriter<W>,
) -> BResult<Vec<Measurement>> {
    config.validate()?;
    let mut dedup = strategy.build::<String>();
    let mut times = Vec::with_capacity(config.runs_per_sample_size);
    let mut measurements = Vec::new();

    for size in config.sample_sizes() {
        let sample = sampler.get(size);

        // Untimed, also leaves the scratch space allocated for the timed runs.
        let deduped = dedup.dedup(&sample);
        if config.verify && !is_correct_dedup(&sample, &deduped) {
            return Err(BenchError::IncorrectDedup {
                strategy,
                input: sampler.filename().to_owned(),
                size,
            });
        }

        times.clear();
        for _ in 0..config.runs_per_sample_size {
            let (elapsed, result) = measure(|| dedup.dedup(black_box(&sample)));
            black_box(result);
            times.push(elapsed);
        }

        let measurement = Measurement {
            size,
            time: config.statistic.apply(&mut times),
            uniques: deduped.len(),
        };
        tracing::trace!(
            "{strategy} size={size} uniques={} time={}",
            measurement.uniques,
            fmt_duration(measurement.time)
        );
        out.write(&measurement)?;
        measurements.push(measurement);
    }
    Ok(measurements)
}

/// Runs every strategy on every file. Returns the paths of the CSV files
/// written, in order.
///
/// All strategies see the same sequence of samples for a given file. A
/// strategy listed twice is only run once.
pub fn run(
    config: &RunConfig,
    files: &[PathBuf],
    strategies: &[Strategy],
) -> BResult<Vec<PathBuf>> {
    config.validate()?;
    let strategies: Vec<Strategy> = strategies.iter().copied().unique().collect();

    if config.warm_up {
        tracing::info!("starting warm-up");
        for &strategy in &strategies {
            let _: Duration = warm_up(strategy);
        }
        tracing::info!("warm-up finished");
    }

    let mut outputs = Vec::new();
    for file in files {
        let corpus = Sampler::open(file, config.seed)?;
        tracing::debug!("corpus {}: {} words", corpus.filename(), corpus.corpus_len());
        for &strategy in &strategies {
            let mut sampler = corpus.clone();
            tracing::info!("starting {strategy} tests for {}", sampler.filename());

            let mut out =
                CsvWriter::create(&config.output_dir, strategy.name(), sampler.filename())?;
            let (elapsed, measurements) =
                measure(|| run_algorithm(config, &mut sampler, strategy, &mut out));
            let measurements = measurements?;
            let path = out.path().to_owned();
            out.finish()?;

            tracing::info!(
                "wrote {} rows to {} in {}",
                measurements.len(),
                path.display(),
                fmt_duration(elapsed)
            );
            outputs.push(path);
        }
    }
    Ok(outputs)
}
