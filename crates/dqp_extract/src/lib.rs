//! CSV extraction for the data quality pipeline.
//!
//! This crate reads a delimited text file into a [`Dataset`] in permissive
//! mode: a record that fails to decode, or whose field count does not match
//! the header, is logged as a warning with its line number and skipped.
//! Extraction-time exclusion is separate from quality-rule exclusion — a
//! skipped line never reaches the rule engine.
//!
//! Cells are typed on the way in: an empty cell becomes [`Value::Null`], a
//! cell that parses as `i64` becomes [`Value::Int`], a cell that parses as a
//! finite `f64` becomes [`Value::Float`], and anything else stays a
//! [`Value::String`]. Dates deliberately stay strings; the date rule parses
//! them under the configured grammar.
//!
//! # Example
//!
//! ```no_run
//! use dqp_core::{Extractor, TracingReporter};
//! use dqp_extract::CsvExtractor;
//!
//! let extractor = CsvExtractor::new("data/activity_data.csv");
//! let extraction = extractor.extract(&TracingReporter::new())?;
//! println!("{} rows from {}", extraction.dataset.len(), extraction.file_name);
//! # Ok::<(), dqp_core::PipelineError>(())
//! ```

use dqp_core::{Dataset, Extraction, Extractor, PipelineError, Reporter, Result, Row, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extraction adapter for delimited text files.
#[derive(Debug, Clone)]
pub struct CsvExtractor {
    path: PathBuf,
    delimiter: u8,
}

impl CsvExtractor {
    /// Creates an extractor for a comma-delimited file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Extractor for CsvExtractor {
    fn extract(&self, reporter: &dyn Reporter) -> Result<Extraction> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| PipelineError::extract(self.display_path(), e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PipelineError::extract(self.display_path(), e))?
            .iter()
            .map(str::to_string)
            .collect();
        let arity = headers.len();

        let mut dataset = Dataset::new(headers);
        let mut skipped_lines = 0;

        for (ordinal, record) in reader.records().enumerate() {
            match record {
                Ok(record) if record.len() == arity => {
                    let values = record.iter().map(parse_value).collect();
                    dataset.push_row(Row::new(values));
                }
                Ok(record) => {
                    skipped_lines += 1;
                    reporter.warn(&format!(
                        "skipping line {}: expected {} fields, found {}",
                        record_line(record.position(), ordinal),
                        arity,
                        record.len()
                    ));
                }
                Err(e) => {
                    skipped_lines += 1;
                    reporter.warn(&format!(
                        "skipping line {}: {}",
                        record_line(e.position(), ordinal),
                        e
                    ));
                }
            }
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display_path());
        let file_stem = self
            .path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());

        debug!(
            "extracted {} rows ({} skipped) from {}",
            dataset.len(),
            skipped_lines,
            file_name
        );

        Ok(Extraction {
            dataset,
            file_name,
            file_stem,
            skipped_lines,
        })
    }
}

/// Types a raw CSV cell.
///
/// Only finite floats are typed numerically so that full-row equality stays
/// well-defined for duplicate detection ("NaN"/"inf" stay strings).
fn parse_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::Float(f);
        }
    }
    Value::String(raw.to_string())
}

/// 1-based input line for a record, falling back to the record ordinal when
/// the reader has no position (the header occupies line 1).
fn record_line(position: Option<&csv::Position>, ordinal: usize) -> u64 {
    position
        .map(|p| p.line())
        .unwrap_or(ordinal as u64 + 2)
}
