//! Clean-subset derivation and the row-count invariant.

use dqp_core::{Dataset, DqReport, PipelineError, Reporter, Result};

/// Derives the clean subset of a dataset and verifies the row accounting.
#[derive(Debug, Default)]
pub struct Reconciler;

impl Reconciler {
    /// Creates a new reconciler.
    pub fn new() -> Self {
        Self
    }

    /// Returns the clean subset of `dataset` according to `report`,
    /// preserving input row order and leaving every value unchanged.
    ///
    /// Invariant: `|clean| == |dataset| - |unique flagged rows|`. A breach
    /// means evaluation and reconciliation disagree about which rows exist —
    /// a bug, not a data condition — so it raises
    /// [`PipelineError::RowCountMismatch`] instead of silently correcting
    /// the subset.
    pub fn reconcile(
        &self,
        dataset: &Dataset,
        report: &DqReport,
        reporter: &dyn Reporter,
    ) -> Result<Dataset> {
        let clean = dataset.select_rows(report.clean_rows.iter().copied());

        let total = dataset.len();
        let flagged = report.flagged_rows().len();
        let expected = total - flagged;

        if clean.len() != expected {
            reporter.error(&format!(
                "row count mismatch between clean and original datasets \
                 ({} clean, expected {})",
                clean.len(),
                expected
            ));
            return Err(PipelineError::RowCountMismatch {
                expected,
                actual: clean.len(),
                total,
                flagged,
            });
        }

        reporter.info(&format!(
            "row count check passed: {} clean of {} total rows",
            clean.len(),
            total
        ));
        Ok(clean)
    }
}
