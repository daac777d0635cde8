use crate::dataset::{Dataset, Record};
use crate::source::{DatasetSource, SourceError};

use glob::glob;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Parse `size,rooms,price` rows. Columns are taken by position, so the
/// header text (if any) does not matter and is never decoded.
pub fn read_records<R: Read>(reader: R, has_header: bool) -> Result<Vec<Record>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = rdr.byte_records().enumerate();
    if has_header {
        if let Some((_, header)) = rows.next() {
            header?;
        }
    }

    let mut records = Vec::new();
    for (i, row) in rows {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        let record: Record = row
            .deserialize(None)
            .map_err(|e| SourceError::Parse { line, reason: e.to_string() })?;
        if !record.is_finite() {
            let reason = format!("non-finite value in {record}");
            return Err(SourceError::Parse { line, reason });
        }
        records.push(record);
    }
    Ok(records)
}

/// Expand `inputs` into actual files. Entries with wildcards are globbed
/// and sorted, everything else is taken literally.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, SourceError> {
    let mut out = Vec::new();

    for inp in inputs {
        if inp.contains('*') || inp.contains('?') || inp.contains('[') {
            let paths = glob(inp)
                .map_err(|source| SourceError::Glob { pattern: inp.clone(), source })?;
            let mut matched: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
            if matched.is_empty() {
                log::warn!("glob '{}' matched no files", inp);
            }
            matched.sort();
            out.extend(matched);
        } else {
            out.push(PathBuf::from(inp));
        }
    }

    Ok(out)
}

/// One or more delimited files read in order and concatenated.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    pub inputs: Vec<String>,
    pub has_header: bool,
}

impl CsvFileSource {
    pub fn new(inputs: Vec<String>, has_header: bool) -> Self {
        Self { inputs, has_header }
    }
}

impl DatasetSource for CsvFileSource {
    fn fetch(&self) -> Result<Dataset, SourceError> {
        let files = resolve_inputs(&self.inputs)?;
        if files.is_empty() {
            return Err(SourceError::NoFiles(self.inputs.clone()));
        }

        let mut records = Vec::new();
        for path in files {
            let file =
                File::open(&path).map_err(|source| SourceError::Io { path: path.clone(), source })?;
            let rows = read_records(file, self.has_header)?;
            log::info!("read {} records from {}", rows.len(), path.display());
            records.extend(rows);
        }
        Ok(Dataset::new(records))
    }
}
