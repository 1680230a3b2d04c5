use dedup_core::Strategy;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type BResult<T> = std::result::Result<T, BenchError>;

/// Everything that can stop a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("could not read corpus {}: {source}", .path.display())]
    ReadCorpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corpus {0} contains no words")]
    EmptyCorpus(String),
    #[error("could not create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write to {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),
    #[error("{strategy} gave an incorrect result for {size} words of {input}")]
    IncorrectDedup {
        strategy: Strategy,
        input: String,
        size: usize,
    },
}
