//! Pipeline orchestration.
//!
//! Sequences extraction, evaluation, reconciliation, summarization, and
//! load, and owns the transactional boundary: the load step only runs after
//! reconciliation has verified the row accounting, so an aborted run never
//! leaves partial writes behind. Faults are not retried; rule evaluation is
//! deterministic and pure, so a retry would reproduce the same fault.

use crate::{Evaluator, Reconciler, RuleSet, Summarizer};
use dqp_core::{
    Dataset, DqReport, Extractor, Loader, PipelineError, PipelineOptions, Reporter, Result,
    Severity, Summary, Violation,
};
use serde::Serialize;
use std::time::Instant;

/// Column holding the opaque record identifier used to group reported
/// issues.
const ID_COLUMN: &str = "Id";

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Input file name
    pub source: String,
    /// Destination table name
    pub table: String,
    /// Rows extracted into the dataset
    pub rows_extracted: usize,
    /// Columns in the dataset
    pub columns: usize,
    /// Malformed input lines skipped at extraction time
    pub skipped_lines: usize,
    /// All (row, rule) findings
    pub violations: Vec<Violation>,
    /// Findings grouped by (rule, severity)
    pub summary: Summary,
    /// Distinct ids among flagged rows
    pub affected_ids: usize,
    /// Rows in the clean subset
    pub rows_clean: usize,
    /// Rows written to the destination table (0 for audit runs)
    pub rows_loaded: usize,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

/// The data quality pipeline.
///
/// Collaborators are passed in per run, so the same pipeline value can be
/// driven against files, fakes, or alternative stores.
pub struct Pipeline {
    ruleset: RuleSet,
    options: PipelineOptions,
    evaluator: Evaluator,
    reconciler: Reconciler,
    summarizer: Summarizer,
}

impl Pipeline {
    /// Creates a pipeline with the given rule set and options.
    pub fn new(ruleset: RuleSet, options: PipelineOptions) -> Self {
        Self {
            ruleset,
            options,
            evaluator: Evaluator::new(),
            reconciler: Reconciler::new(),
            summarizer: Summarizer::new(),
        }
    }

    /// Creates a pipeline with the standard rule set.
    pub fn standard(options: PipelineOptions) -> Self {
        let ruleset = RuleSet::standard(&options);
        Self::new(ruleset, options)
    }

    /// Runs the full pipeline: extract, evaluate, reconcile, summarize,
    /// load.
    ///
    /// On a reconciliation fault or an enforced abort the run terminates
    /// before `loader` is invoked.
    pub fn run(
        &self,
        extractor: &dyn Extractor,
        loader: &dyn Loader,
        reporter: &dyn Reporter,
    ) -> Result<RunReport> {
        let start = Instant::now();
        reporter.milestone("pipeline run started");

        let (clean, mut report) = self.stages(extractor, reporter)?;

        report.rows_loaded = loader.load(&clean, &report.table)?;
        reporter.info(&format!(
            "loaded {} clean row(s) into table '{}'",
            report.rows_loaded, report.table
        ));

        report.duration_ms = start.elapsed().as_millis() as u64;
        reporter.milestone(&format!(
            "pipeline run completed in {}ms",
            report.duration_ms
        ));
        Ok(report)
    }

    /// Runs every stage except the load, for dry-run inspection.
    pub fn audit(&self, extractor: &dyn Extractor, reporter: &dyn Reporter) -> Result<RunReport> {
        let start = Instant::now();
        reporter.milestone("pipeline audit started");

        let (_, mut report) = self.stages(extractor, reporter)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        reporter.milestone(&format!(
            "pipeline audit completed in {}ms",
            report.duration_ms
        ));
        Ok(report)
    }

    /// Extract → evaluate → reconcile → summarize, plus the enforcement
    /// gate. Returns the clean subset alongside the partially-filled report.
    fn stages(
        &self,
        extractor: &dyn Extractor,
        reporter: &dyn Reporter,
    ) -> Result<(Dataset, RunReport)> {
        let extraction = extractor.extract(reporter)?;
        let dataset = &extraction.dataset;
        reporter.info(&format!(
            "extracted {} rows and {} columns from {}",
            dataset.len(),
            dataset.columns().len(),
            extraction.file_name
        ));

        let dq_report = self.evaluator.evaluate(dataset, &self.ruleset, reporter);

        let clean = self.reconciler.reconcile(dataset, &dq_report, reporter)?;

        let summary = self.summarizer.summarize(&dq_report);
        let affected_ids = self
            .summarizer
            .affected_ids(dataset, &dq_report, ID_COLUMN);
        reporter.info(&format!(
            "{} data quality issue(s) found across {} id(s)",
            summary.total(),
            affected_ids.len()
        ));

        self.enforce_severity(&dq_report, reporter)?;

        let table = self
            .options
            .table
            .clone()
            .unwrap_or_else(|| extraction.file_stem.clone());

        let report = RunReport {
            source: extraction.file_name.clone(),
            table,
            rows_extracted: dataset.len(),
            columns: dataset.columns().len(),
            skipped_lines: extraction.skipped_lines,
            violations: dq_report.violations,
            summary,
            affected_ids: affected_ids.len(),
            rows_clean: clean.len(),
            rows_loaded: 0,
            duration_ms: 0,
        };
        Ok((clean, report))
    }

    /// Applies the abort-severity gate.
    ///
    /// Severity is reporting metadata unless enforcement is enabled; when it
    /// is disabled and abort-severity findings exist, the discrepancy is
    /// logged rather than acted on.
    fn enforce_severity(&self, report: &DqReport, reporter: &dyn Reporter) -> Result<()> {
        if !report.has_severity(Severity::Abort) {
            return Ok(());
        }

        let abort_violations: Vec<&Violation> = report
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Abort)
            .collect();
        let rules: std::collections::BTreeSet<&str> = abort_violations
            .iter()
            .map(|v| v.rule_name.as_str())
            .collect();

        if self.options.enforce_abort {
            reporter.error(&format!(
                "{} abort-severity violation(s) with enforcement enabled; aborting run",
                abort_violations.len()
            ));
            Err(PipelineError::AbortViolations {
                count: abort_violations.len(),
                rules: rules.len(),
            })
        } else {
            reporter.warn(&format!(
                "{} abort-severity violation(s) present; enforcement disabled, continuing",
                abort_violations.len()
            ));
            Ok(())
        }
    }
}
