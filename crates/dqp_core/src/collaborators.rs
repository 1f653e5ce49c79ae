//! Collaborator traits for the I/O boundary of the pipeline.
//!
//! Extraction and load are thin adapters the engine calls through these
//! narrow interfaces; implementations live in their own crates and can be
//! substituted with in-memory fakes in tests.

use crate::{Dataset, Reporter, Result};

/// Output of the extraction step.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The extracted dataset, immutable for the rest of the run
    pub dataset: Dataset,
    /// Input file name, used in log messages
    pub file_name: String,
    /// Input file stem, the default destination table name
    pub file_stem: String,
    /// Number of malformed input lines skipped during extraction
    pub skipped_lines: usize,
}

/// Produces a dataset from a tabular input source.
///
/// Extraction is permissive: a line that cannot be decoded into a row is
/// reported as a warning through the [`Reporter`] and skipped, not treated
/// as a fault.
pub trait Extractor {
    /// Extracts the full dataset from the source.
    fn extract(&self, reporter: &dyn Reporter) -> Result<Extraction>;
}

/// Persists a dataset into a destination table.
pub trait Loader {
    /// Writes `dataset` into `table` with full-table-replace semantics,
    /// returning the number of rows written.
    fn load(&self, dataset: &Dataset, table: &str) -> Result<usize>;
}
