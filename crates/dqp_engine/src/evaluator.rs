//! Rule evaluation over a dataset.

use crate::RuleSet;
use dqp_core::{Dataset, DqReport, Reporter, Violation};
use std::collections::BTreeSet;

/// Applies every rule of a set to a dataset and collects the findings.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `ruleset` against `dataset`.
    ///
    /// Each rule computes its flagged row set over the whole dataset; a row
    /// failing several rules yields one [`Violation`] per failed rule. Rules
    /// with at least one finding are logged with their own affected-row
    /// count (each rule counts rows, not violations, so a row flagged twice
    /// by different rules never inflates either rule's count).
    ///
    /// Malformed data surfaces as violations here, never as faults; the only
    /// fault surface is reconciliation.
    pub fn evaluate(
        &self,
        dataset: &Dataset,
        ruleset: &RuleSet,
        reporter: &dyn Reporter,
    ) -> DqReport {
        let mut violations = Vec::new();

        for rule in ruleset.rules() {
            let flagged = rule.flag(dataset);
            if flagged.is_empty() {
                continue;
            }
            reporter.warn(&format!(
                "{}s found: {} affected row(s)",
                rule.name(),
                flagged.len()
            ));
            violations.extend(flagged.into_iter().map(|row_index| Violation {
                row_index,
                rule_name: rule.name().to_string(),
                severity: rule.severity(),
            }));
        }

        let flagged: BTreeSet<usize> = violations.iter().map(|v| v.row_index).collect();
        let clean_rows = (0..dataset.len()).filter(|i| !flagged.contains(i)).collect();

        DqReport {
            violations,
            clean_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DuplicateRows, InvalidDate, MissingValue, NegativeValue};
    use dqp_core::{CapturingReporter, EventLevel, PipelineOptions, Row, Rule, Severity, Value};
    use pretty_assertions::assert_eq;

    fn activity_dataset(rows: Vec<Vec<Value>>) -> Dataset {
        Dataset::from_rows(
            vec!["Date".into(), "SedentaryMinutes".into()],
            rows.into_iter().map(Row::new).collect(),
        )
    }

    /// Dataset from the mixed-violation scenario: one valid row, one
    /// negative-minutes row, one bad date.
    fn mixed_dataset() -> Dataset {
        activity_dataset(vec![
            vec![Value::String("2022-01-01".into()), Value::Int(10)],
            vec![Value::String("2022-01-02".into()), Value::Int(-20)],
            vec![Value::String("invalid_date".into()), Value::Int(30)],
        ])
    }

    #[test]
    fn test_mixed_violations() {
        let ds = mixed_dataset();
        let report = Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &CapturingReporter::new(),
        );

        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].rule_name, "Invalid date");
        assert_eq!(report.violations[0].row_index, 2);
        assert_eq!(report.violations[1].rule_name, "Negative SedentaryMinutes");
        assert_eq!(report.violations[1].row_index, 1);
        assert_eq!(report.clean_rows, [0].into());
    }

    #[test]
    fn test_row_failing_two_rules_yields_two_violations() {
        // Bad date AND a null cell in the same row
        let ds = activity_dataset(vec![vec![Value::String("not-a-date".into()), Value::Null]]);
        let report = Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &CapturingReporter::new(),
        );

        assert_eq!(report.violations.len(), 2);
        let severities: Vec<Severity> = report.violations.iter().map(|v| v.severity).collect();
        assert_eq!(severities, vec![Severity::Abort, Severity::Warning]);
        assert_eq!(report.flagged_rows(), [0].into());
        assert!(report.clean_rows.is_empty());
    }

    #[test]
    fn test_per_rule_counts_logged() {
        let ds = mixed_dataset();
        let reporter = CapturingReporter::new();
        Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &reporter,
        );

        let warnings = reporter.messages_at(EventLevel::Warn);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Invalid date"));
        assert!(warnings[0].contains("1 affected row"));
        assert!(warnings[1].contains("Negative SedentaryMinutes"));
    }

    #[test]
    fn test_clean_dataset_produces_clean_report() {
        let ds = activity_dataset(vec![
            vec![Value::String("2022-01-01".into()), Value::Int(10)],
            vec![Value::String("2022-01-02".into()), Value::Int(20)],
        ]);
        let reporter = CapturingReporter::new();
        let report = Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &reporter,
        );

        assert_eq!(report, DqReport::clean(2));
        assert!(reporter.messages_at(EventLevel::Warn).is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let ds = mixed_dataset();
        let ruleset = RuleSet::standard(&PipelineOptions::default());
        let evaluator = Evaluator::new();
        let first = evaluator.evaluate(&ds, &ruleset, &CapturingReporter::new());
        let second = evaluator.evaluate(&ds, &ruleset, &CapturingReporter::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_match_rule_changes_nothing() {
        struct NeverMatches;
        impl Rule for NeverMatches {
            fn name(&self) -> &str {
                "Never matches"
            }
            fn severity(&self) -> Severity {
                Severity::Abort
            }
            fn flag(&self, _dataset: &Dataset) -> std::collections::BTreeSet<usize> {
                std::collections::BTreeSet::new()
            }
        }

        let ds = mixed_dataset();
        let baseline = Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &CapturingReporter::new(),
        );

        let mut extended = RuleSet::standard(&PipelineOptions::default());
        extended.push(NeverMatches);
        let with_extra = Evaluator::new().evaluate(&ds, &extended, &CapturingReporter::new());

        assert_eq!(baseline, with_extra);
    }

    #[test]
    fn test_duplicate_scenario_flags_both_members() {
        let ds = Dataset::from_rows(
            vec!["A".into(), "B".into()],
            vec![
                Row::new(vec![Value::Int(1), Value::Int(11)]),
                Row::new(vec![Value::Int(2), Value::Int(22)]),
                Row::new(vec![Value::Int(1), Value::Int(11)]),
            ],
        );
        let mut ruleset = RuleSet::new();
        ruleset.push(DuplicateRows::new());

        let report = Evaluator::new().evaluate(&ds, &ruleset, &CapturingReporter::new());
        assert_eq!(report.flagged_rows(), [0, 2].into());
        assert_eq!(report.clean_rows, [1].into());
    }

    #[test]
    fn test_rules_evaluate_independently_of_order() {
        let ds = mixed_dataset();
        let mut reversed = RuleSet::new();
        reversed.push(DuplicateRows::new());
        reversed.push(NegativeValue::new("SedentaryMinutes"));
        reversed.push(MissingValue::new());
        reversed.push(InvalidDate::new("Date", "%Y-%m-%d"));

        let standard_report = Evaluator::new().evaluate(
            &ds,
            &RuleSet::standard(&PipelineOptions::default()),
            &CapturingReporter::new(),
        );
        let reversed_report =
            Evaluator::new().evaluate(&ds, &reversed, &CapturingReporter::new());

        assert_eq!(
            standard_report.flagged_rows(),
            reversed_report.flagged_rows()
        );
        assert_eq!(standard_report.clean_rows, reversed_report.clean_rows);
    }
}
