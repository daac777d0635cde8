pub mod csv_file;
pub mod http;

pub use csv_file::{read_records, resolve_inputs, CsvFileSource};
pub use http::{HttpCsvSource, DEFAULT_DATA_URL};

use crate::dataset::{Dataset, Record};

use std::path::PathBuf;

/// Anything that can hand over a complete, parsed dataset.
pub trait DatasetSource {
    fn fetch(&self) -> Result<Dataset, SourceError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    Parse { line: u64, reason: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid glob '{pattern}': {source}")]
    Glob { pattern: String, source: glob::PatternError },
    #[error("no input files matched {0:?}")]
    NoFiles(Vec<String>),
}

/// Records that already live in memory, handed out as-is.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl DatasetSource for InMemorySource {
    fn fetch(&self) -> Result<Dataset, SourceError> {
        Ok(Dataset::new(self.records.clone()))
    }
}
