//! Pipeline configuration.

use serde::Deserialize;

/// Default date grammar for the `Date` column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Options for one pipeline run.
///
/// Severity enforcement is off by default: abort-severity violations then
/// only drive row removal and reporting, which matches the historical
/// behavior of this pipeline. Setting `enforce_abort` makes them terminate
/// the run before anything is loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PipelineOptions {
    /// Destination table name; defaults to the input file stem when unset
    pub table: Option<String>,

    /// strftime-style grammar the `Date` column must parse under
    pub date_format: String,

    /// Whether abort-severity violations terminate the run
    pub enforce_abort: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            table: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            enforce_abort: false,
        }
    }
}

impl PipelineOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the date grammar.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets abort-severity enforcement.
    pub fn with_enforce_abort(mut self, enforce: bool) -> Self {
        self.enforce_abort = enforce;
        self
    }
}
