//! Violation aggregation for reporting.

use dqp_core::{Dataset, DqReport, Severity, Summary};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregates a [`DqReport`] into reporting views. Pure; no fault paths.
#[derive(Debug, Default)]
pub struct Summarizer;

impl Summarizer {
    /// Creates a new summarizer.
    pub fn new() -> Self {
        Self
    }

    /// Groups violations by (rule name, severity) into counts.
    pub fn summarize(&self, report: &DqReport) -> Summary {
        let mut counts: BTreeMap<(String, Severity), usize> = BTreeMap::new();
        for violation in &report.violations {
            *counts
                .entry((violation.rule_name.clone(), violation.severity))
                .or_insert(0) += 1;
        }
        Summary::from_counts(counts)
    }

    /// Returns the distinct values of `id_column` among flagged rows.
    ///
    /// Ids are opaque; they are only used to group reported issues.
    pub fn affected_ids(
        &self,
        dataset: &Dataset,
        report: &DqReport,
        id_column: &str,
    ) -> BTreeSet<String> {
        report
            .flagged_rows()
            .into_iter()
            .filter_map(|row| dataset.value(row, id_column))
            .map(|v| v.to_string())
            .collect()
    }
}
