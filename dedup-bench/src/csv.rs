//! CSV measurement files.
//!
//! ```text
//! # Measurements: 2016-09-17T12:00:00.000
//! # size(s),runtime(t),v1( t/s ),v2( t/s*u ),v3( t/s*log(s) )
//! 1,700,700,700,0
//! 102,5120,50,3500,112917
//! ```

use crate::{BResult, BenchError, Measurement};
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Column description, written as a comment line.
pub const HEADER: &str = "# size(s),runtime(t),v1( t/s ),v2( t/s*u ),v3( t/s*log(s) )";

/// Name of the output file for `algorithm` run on `input_name`.
#[must_use]
pub fn output_file_name(algorithm: &str, input_name: &str) -> String {
    format!("{algorithm} - {input_name}.csv")
}

pub struct CsvWriter<W: Write> {
    out: W,
    path: PathBuf,
}

impl CsvWriter<BufWriter<File>> {
    /// Creates `dir/<algorithm> - <input_name>.csv`, stamped with the local time.
    pub fn create(dir: &Path, algorithm: &str, input_name: &str) -> BResult<Self> {
        let path = dir.join(output_file_name(algorithm, input_name));
        let file = File::create(&path).map_err(|source| BenchError::CreateOutput {
            path: path.clone(),
            source,
        })?;
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        Self::new(BufWriter::new(file), path, timestamp)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Writes the two header lines to `out`. `path` is only used in errors.
    pub fn new(out: W, path: PathBuf, timestamp: impl Display) -> BResult<Self> {
        let mut writer = Self { out, path };
        writer.io(|out| {
            writeln!(out, "# Measurements: {timestamp}")?;
            writeln!(out, "{HEADER}")
        })?;
        Ok(writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, measurement: &Measurement) -> BResult<()> {
        let row = measurement.csv_row();
        self.io(|out| writeln!(out, "{row}"))
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> BResult<W> {
        self.io(Write::flush)?;
        Ok(self.out)
    }

    fn io(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) -> BResult<()> {
        f(&mut self.out).map_err(|source| BenchError::WriteOutput {
            path: self.path.clone(),
            source,
        })
    }
}
