use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{DataSource, Dataset, DatasetError};

/// Loads the first column of a CSV file.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv {}", self.path.display())
    }

    fn load(&self) -> Result<Dataset, DatasetError> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let dataset = parse_csv(BufReader::new(file)).map_err(|err| match err {
            DatasetError::Io { source, .. } => DatasetError::Io {
                path: self.path.clone(),
                source,
            },
            other => other,
        })?;
        debug!(path = %self.path.display(), values = dataset.len(), "loaded csv dataset");
        Ok(dataset)
    }
}

/// Parse CSV text into a dataset.
///
/// The first line is a header. From every later non-blank line the first
/// column is coerced to a number; cells that are empty, non-numeric, or
/// non-finite are dropped.
pub fn parse_csv<R: BufRead>(reader: R) -> Result<Dataset, DatasetError> {
    let mut values = Vec::new();
    let mut dropped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DatasetError::Io {
            path: PathBuf::new(),
            source,
        })?;

        if idx == 0 || line.trim().is_empty() {
            continue;
        }

        match coerce(first_field(&line)) {
            Some(value) => values.push(value),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, kept = values.len(), "dropped non-numeric csv cells");
    }

    Dataset::new(values)
}

fn first_field(line: &str) -> &str {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix('"') {
        // Quoted field; embedded commas stay inside the quotes.
        return match rest.find('"') {
            Some(end) => &rest[..end],
            None => rest,
        };
    }
    trimmed.split(',').next().unwrap_or_default()
}

fn coerce(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
