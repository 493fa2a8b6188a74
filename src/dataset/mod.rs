//! Dataset sources feeding the engines.
//!
//! A [`Dataset`] is an ordered, finite-valued sequence of numbers. It
//! can come from the first column of a CSV file or from a random
//! generator; both implement [`DataSource`].

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

mod csv;
mod random;

pub use self::csv::{parse_csv, CsvSource};
pub use self::random::RandomSource;

/// Errors raised while building a dataset or validating a search key.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A value that is not a finite number reached the boundary.
    #[error("expected a finite number for {what}, got {value}")]
    TypeMismatch { what: &'static str, value: String },

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// Something that can produce an ordered sequence of numbers.
pub trait DataSource {
    /// Short human-readable description used in logs and text output.
    fn describe(&self) -> String;

    /// Produce a fresh dataset.
    fn load(&self) -> Result<Dataset, DatasetError>;
}

/// Ordered numeric values in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Build a dataset, rejecting NaN and infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self, DatasetError> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(DatasetError::TypeMismatch {
                what: "dataset value",
                value: bad.to_string(),
            });
        }
        Ok(Dataset { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First `n` values (fewer when the dataset is shorter).
    pub fn preview(&self, n: usize) -> &[f64] {
        &self.values[..n.min(self.values.len())]
    }

    /// The value at `len / 2`, used as the default search key.
    pub fn middle(&self) -> Option<f64> {
        self.values.get(self.values.len() / 2).copied()
    }

    /// Write the dataset as a single-column CSV with a `value` header.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "value")?;
        for value in &self.values {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }
}

/// Accept a search key only if it is a finite number.
pub fn validate_key(key: f64) -> Result<f64, DatasetError> {
    if key.is_finite() {
        Ok(key)
    } else {
        Err(DatasetError::TypeMismatch {
            what: "search key",
            value: key.to_string(),
        })
    }
}
