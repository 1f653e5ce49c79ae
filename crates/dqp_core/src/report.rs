//! Quality report and summary types.
//!
//! A [`DqReport`] is the evaluator's output for one dataset: the full list of
//! violations plus the set of clean row indices. A [`Summary`] is the grouped
//! view used for reporting. Both are plain return values; they are rebuilt on
//! every run and never persisted.

use crate::{Severity, Violation};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The result of evaluating a rule set against a dataset.
///
/// Invariants: `clean_rows` is disjoint from the violated row indices, and
/// together they cover every row index of the evaluated dataset. The
/// reconciler checks the row accounting before any data leaves the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DqReport {
    /// All (row, rule) findings, in rule order then row order
    pub violations: Vec<Violation>,
    /// Row indices with zero findings
    pub clean_rows: BTreeSet<usize>,
}

impl DqReport {
    /// Creates an empty report for a dataset of `total_rows` rows: no
    /// violations, every row clean.
    pub fn clean(total_rows: usize) -> Self {
        Self {
            violations: Vec::new(),
            clean_rows: (0..total_rows).collect(),
        }
    }

    /// Returns the distinct row indices with at least one violation.
    pub fn flagged_rows(&self) -> BTreeSet<usize> {
        self.violations.iter().map(|v| v.row_index).collect()
    }

    /// Returns true if the given row has no violations.
    pub fn is_clean(&self, row_index: usize) -> bool {
        self.clean_rows.contains(&row_index)
    }

    /// Returns true if any violation carries the given severity.
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity == severity)
    }
}

/// One grouped line of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Rule name the violations belong to
    pub rule_name: String,
    /// Severity of those violations
    pub severity: Severity,
    /// Number of violations in the group
    pub count: usize,
}

/// Violation counts grouped by (rule name, severity).
///
/// Derived from a [`DqReport`]; entries are ordered by rule name then
/// severity so output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    /// Builds a summary from grouped counts.
    pub fn from_counts(counts: BTreeMap<(String, Severity), usize>) -> Self {
        let entries = counts
            .into_iter()
            .map(|((rule_name, severity), count)| SummaryEntry {
                rule_name,
                severity,
                count,
            })
            .collect();
        Self { entries }
    }

    /// Returns the grouped entries in (rule name, severity) order.
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Returns the count for one (rule, severity) group, 0 if absent.
    pub fn count(&self, rule_name: &str, severity: Severity) -> usize {
        self.entries
            .iter()
            .find(|e| e.rule_name == rule_name && e.severity == severity)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Returns the total number of violations across all groups.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Returns true if there are no grouped entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
