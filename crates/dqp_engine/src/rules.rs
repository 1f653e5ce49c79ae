//! The standard quality rules and the rule set that holds them.
//!
//! Each rule is an independent [`Rule`] implementation; the set is open, so
//! rules can be added or removed without touching the evaluator.

use chrono::NaiveDate;
use dqp_core::{Dataset, PipelineOptions, Rule, Severity, Value};
use std::collections::{BTreeSet, HashMap};

/// Flags rows whose date cell does not parse under the configured grammar.
///
/// Null cells are not flagged here; a missing date is owned by
/// [`MissingValue`]. A dataset without the date column flags every row,
/// since no row can satisfy the grammar.
#[derive(Debug, Clone)]
pub struct InvalidDate {
    column: String,
    format: String,
}

impl InvalidDate {
    /// Creates the rule for `column` with a strftime-style `format`.
    pub fn new(column: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            format: format.into(),
        }
    }
}

impl Rule for InvalidDate {
    fn name(&self) -> &str {
        "Invalid date"
    }

    fn severity(&self) -> Severity {
        Severity::Abort
    }

    fn flag(&self, dataset: &Dataset) -> BTreeSet<usize> {
        let Some(col) = dataset.column_index(&self.column) else {
            return (0..dataset.len()).collect();
        };

        dataset
            .rows()
            .enumerate()
            .filter(|(_, row)| match row.get(col) {
                Some(Value::Null) => false,
                Some(Value::String(s)) => NaiveDate::parse_from_str(s, &self.format).is_err(),
                // Numeric cells cannot be a calendar date under the grammar
                Some(_) => true,
                None => true,
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Flags rows with at least one null cell.
#[derive(Debug, Clone, Default)]
pub struct MissingValue;

impl MissingValue {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MissingValue {
    fn name(&self) -> &str {
        "Missing value"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn flag(&self, dataset: &Dataset) -> BTreeSet<usize> {
        dataset
            .rows()
            .enumerate()
            .filter(|(_, row)| row.values().iter().any(Value::is_null))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Flags rows where a numeric column is present and negative.
///
/// Missing or non-numeric cells do not flag; absence is tolerated by this
/// rule's contract.
#[derive(Debug, Clone)]
pub struct NegativeValue {
    column: String,
    name: String,
}

impl NegativeValue {
    /// Creates the rule for `column`; the rule is named after it.
    pub fn new(column: impl Into<String>) -> Self {
        let column = column.into();
        let name = format!("Negative {column}");
        Self { column, name }
    }
}

impl Rule for NegativeValue {
    fn name(&self) -> &str {
        &self.name
    }

    fn severity(&self) -> Severity {
        Severity::Continue
    }

    fn flag(&self, dataset: &Dataset) -> BTreeSet<usize> {
        let Some(col) = dataset.column_index(&self.column) else {
            return BTreeSet::new();
        };

        dataset
            .rows()
            .enumerate()
            .filter(|(_, row)| {
                row.get(col)
                    .and_then(Value::as_float)
                    .is_some_and(|v| v < 0.0)
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Flags exact full-row duplicates.
///
/// Comparison is dataset-wide: every member of a duplicate group is flagged,
/// the first occurrence included.
#[derive(Debug, Clone, Default)]
pub struct DuplicateRows;

impl DuplicateRows {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DuplicateRows {
    fn name(&self) -> &str {
        "Duplicate records"
    }

    fn severity(&self) -> Severity {
        Severity::Abort
    }

    fn flag(&self, dataset: &Dataset) -> BTreeSet<usize> {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in dataset.rows().enumerate() {
            let key = row
                .values()
                .iter()
                .map(|v| format!("{}:{}", v.type_name(), v))
                .collect::<Vec<_>>()
                .join("|");
            groups.entry(key).or_default().push(i);
        }

        groups
            .into_values()
            .filter(|members| members.len() > 1)
            .flatten()
            .collect()
    }
}

/// An ordered, open set of quality rules.
///
/// Ordering only affects log and report readability; every rule is evaluated
/// independently and all of a row's findings are retained.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard rule set for activity datasets, in reporting order.
    pub fn standard(options: &PipelineOptions) -> Self {
        let mut set = Self::new();
        set.push(InvalidDate::new("Date", options.date_format.clone()));
        set.push(MissingValue::new());
        set.push(NegativeValue::new("SedentaryMinutes"));
        set.push(DuplicateRows::new());
        set
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the rules in order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard(&PipelineOptions::default())
    }
}
