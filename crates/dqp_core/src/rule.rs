//! The quality rule capability and its outputs.
//!
//! A rule classifies rows of a dataset as violating or clean. Rules are
//! stateless and side-effect-free; a malformed value is reported as a
//! violation, never as an evaluation failure.

use crate::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reporting weight of a violation.
///
/// Severity classifies how a violation is reported and summarized. It does
/// not terminate a run on its own; see
/// [`PipelineOptions::enforce_abort`](crate::PipelineOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The finding is severe enough to abort the run when enforcement is on
    Abort,
    /// The finding should be surfaced prominently
    Warning,
    /// The finding is informational; processing continues
    Continue,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Abort => write!(f, "abort"),
            Severity::Warning => write!(f, "warning"),
            Severity::Continue => write!(f, "continue"),
        }
    }
}

/// A single data quality rule.
///
/// Rules compute their verdict over the whole dataset at once and return the
/// set of violating row indices. Most rules look at one row at a time, but
/// the dataset-wide form lets rules such as duplicate detection compare
/// across rows without special-casing the evaluator.
///
/// Implementations must be deterministic and must tolerate malformed values
/// by flagging the row rather than failing.
pub trait Rule: Send + Sync {
    /// Human-readable rule name, used in reports and logs.
    fn name(&self) -> &str;

    /// Reporting severity for violations of this rule.
    fn severity(&self) -> Severity;

    /// Returns the indices of all rows that violate this rule.
    fn flag(&self, dataset: &Dataset) -> BTreeSet<usize>;
}

/// A single (row, rule) quality finding.
///
/// A row that fails several rules produces one violation per failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 0-based index of the violating row in the extracted dataset
    pub row_index: usize,
    /// Name of the violated rule
    pub rule_name: String,
    /// Severity of the violated rule
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Abort.to_string(), "abort");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Continue.to_string(), "continue");
    }

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::Abort).unwrap(), "\"abort\"");
        let parsed: Severity = serde_json::from_str("\"continue\"").unwrap();
        assert_eq!(parsed, Severity::Continue);
    }
}
