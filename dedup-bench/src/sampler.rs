//! Drawing samples of words from a text corpus.

use crate::{BResult, BenchError};
use std::{fs, path::Path};

/// Words of a corpus, and a seeded generator for sample offsets.
#[derive(Clone, Debug)]
pub struct Sampler {
    name: String,
    words: Vec<String>,
    rng: oorandom::Rand32,
}

impl Sampler {
    /// Reads `path` and splits it on whitespace.
    pub fn open(path: impl AsRef<Path>, seed: u64) -> BResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BenchError::ReadCorpus {
            path: path.to_owned(),
            source,
        })?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        let words = text.split_whitespace().map(str::to_owned).collect();
        Self::from_words(name, words, seed)
    }

    pub fn from_words(name: impl Into<String>, words: Vec<String>, seed: u64) -> BResult<Self> {
        let name = name.into();
        if words.is_empty() {
            return Err(BenchError::EmptyCorpus(name));
        }
        Ok(Self {
            name,
            words,
            rng: oorandom::Rand32::new(seed),
        })
    }

    /// File name of the corpus, used to name output files.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.name
    }

    /// Number of words in the corpus.
    #[must_use]
    pub fn corpus_len(&self) -> usize {
        self.words.len()
    }

    /// `size` consecutive words starting at a random position. Wraps around
    /// the end of the corpus, so any size can be drawn.
    pub fn get(&mut self, size: usize) -> Vec<String> {
        let len = u32::try_from(self.words.len()).unwrap_or(u32::MAX);
        let start = self.rng.rand_range(0..len) as usize;
        self.words
            .iter()
            .cycle()
            .skip(start)
            .take(size)
            .cloned()
            .collect()
    }
}
