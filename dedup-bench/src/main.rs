use clap::{ArgAction, Parser};
use dedup_bench::{RunConfig, Statistic, Strategy};
use std::{path::PathBuf, process::ExitCode};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text corpora to sample words from.
    files: Vec<PathBuf>,

    /// Strategy to measure, repeatable.
    #[arg(
        short,
        long = "strategy",
        value_name = "NAME",
        default_values_t = [Strategy::Basic, Strategy::HashSet]
    )]
    strategies: Vec<Strategy>,

    /// Smallest sample size.
    #[arg(long, default_value_t = 1)]
    lo: usize,

    /// Largest sample size.
    #[arg(long, default_value_t = 10_000)]
    hi: usize,

    /// Number of sample sizes.
    #[arg(long, default_value_t = 100)]
    levels: usize,

    /// Timed runs per sample size.
    #[arg(long, default_value_t = 10)]
    runs: usize,

    #[arg(long, value_enum, default_value_t = Statistic::Median)]
    statistic: Statistic,

    /// Skip the warm-up run.
    #[arg(long)]
    no_warm_up: bool,

    /// Check every result for correctness.
    #[arg(long)]
    verify: bool,

    /// Seed for the sample offsets.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Directory for the CSV files.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// More logging, repeatable.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> RunConfig {
        RunConfig {
            lo: self.lo,
            hi: self.hi,
            levels: self.levels,
            runs_per_sample_size: self.runs,
            statistic: self.statistic,
            warm_up: !self.no_warm_up,
            verify: self.verify,
            seed: self.seed,
            output_dir: self.output_dir.clone(),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if cli.files.is_empty() {
        println!("\nPlease run the program with at least one input file.");
        println!("For example: dedup-bench shakespeare.txt tall100.txt");
        return ExitCode::SUCCESS;
    }

    match dedup_bench::run(&cli.config(), &cli.files, &cli.strategies) {
        Ok(outputs) => {
            tracing::info!("done, {} files written", outputs.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
