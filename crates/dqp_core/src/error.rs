//! Error types for pipeline operations.
//!
//! Data quality violations are *values* ([`crate::Violation`]), never errors.
//! The variants here are the pipeline's fault surface: consistency faults,
//! enforcement aborts, and collaborator (I/O) failures.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Faults that terminate a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The clean/flagged row accounting no longer matches the source
    /// dataset. This signals a bug in evaluation or reconciliation, not a
    /// data problem; it is fatal and never retried.
    #[error(
        "consistency violation: clean subset has {actual} rows, expected {expected} \
         (total {total} minus {flagged} flagged)"
    )]
    RowCountMismatch {
        /// Expected clean-row count
        expected: usize,
        /// Derived clean-row count
        actual: usize,
        /// Total rows in the source dataset
        total: usize,
        /// Distinct flagged row indices
        flagged: usize,
    },

    /// Abort-severity violations are present and enforcement is enabled.
    #[error("{count} abort-severity violation(s) across {rules} rule(s); aborting before load")]
    AbortViolations {
        /// Number of abort-severity violations
        count: usize,
        /// Number of distinct rules that produced them
        rules: usize,
    },

    /// The extraction collaborator failed to produce a dataset.
    #[error("extraction from '{path}' failed: {message}")]
    Extract {
        /// Input path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// The load collaborator failed to persist the clean subset.
    #[error("load into table '{table}' failed: {message}")]
    Load {
        /// Destination table name
        table: String,
        /// Underlying failure
        message: String,
    },
}

impl PipelineError {
    /// Creates an extraction fault from an underlying error.
    pub fn extract(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Extract {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates a load fault from an underlying error.
    pub fn load(table: impl Into<String>, message: impl ToString) -> Self {
        Self::Load {
            table: table.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_mismatch_message() {
        let err = PipelineError::RowCountMismatch {
            expected: 97,
            actual: 96,
            total: 100,
            flagged: 3,
        };
        let message = err.to_string();
        assert!(message.starts_with("consistency violation"));
        assert!(message.contains("96"));
        assert!(message.contains("97"));
    }

    #[test]
    fn test_helper_constructors() {
        let err = PipelineError::extract("data.csv", "bad header");
        assert!(matches!(err, PipelineError::Extract { .. }));
        assert!(err.to_string().contains("data.csv"));

        let err = PipelineError::load("activity", "disk full");
        assert!(matches!(err, PipelineError::Load { .. }));
        assert!(err.to_string().contains("activity"));
    }
}
