//! In-memory dataset representation.
//!
//! This module provides the types for the tabular data that quality rules
//! run against: typed cell values, rows, and the dataset that owns them.

/// A single cell value in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Int(_) => "int64",
            Value::Float(_) => "float64",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    ///
    /// Integers widen to floats so numeric rules can treat both uniformly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::String(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// A single row of data.
///
/// Values are stored in the column order of the owning [`Dataset`]. A row is
/// identified by its 0-based position in the dataset, assigned at extraction
/// time, and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Creates a row from values in column order.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the value at the given column position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the values in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

/// A dataset: an ordered sequence of rows sharing a fixed column schema.
///
/// All rows have the dataset's arity; the column list is set once at
/// construction and the rows are appended in input order, so a row index is
/// stable for the lifetime of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates an empty dataset with the given column schema.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a dataset from a column schema and rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Returns the column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Gets the value at a (row index, column name) position.
    pub fn value(&self, row_index: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row_index)?.get(col)
    }

    /// Appends a row. The row must match the dataset's arity.
    pub fn push_row(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Builds a new dataset containing only the rows at `indices`, in the
    /// order given, with values cloned unchanged.
    pub fn select_rows<I>(&self, indices: I) -> Dataset
    where
        I: IntoIterator<Item = usize>,
    {
        let rows = indices
            .into_iter()
            .filter_map(|i| self.rows.get(i).cloned())
            .collect();
        Dataset {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        let mut ds = Dataset::new(vec!["id".into(), "score".into()]);
        ds.push_row(Row::new(vec![Value::Int(1), Value::Float(0.5)]));
        ds.push_row(Row::new(vec![Value::Int(2), Value::Null]));
        ds.push_row(Row::new(vec![Value::Int(3), Value::Float(1.5)]));
        ds
    }

    #[test]
    fn test_value_types() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::String("test".into()).type_name(), "string");
        assert_eq!(Value::Int(42).type_name(), "int64");
        assert_eq!(Value::Float(3.5).type_name(), "float64");
    }

    #[test]
    fn test_value_conversions() {
        let val = Value::String("hello".into());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_int(), None);

        let val = Value::Int(42);
        assert_eq!(val.as_int(), Some(42));
        assert_eq!(val.as_float(), Some(42.0));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::String("a".into()).to_string(), "a");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_dataset_operations() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.column_index("score"), Some(1));
        assert_eq!(ds.column_index("missing"), None);
        assert_eq!(ds.value(1, "score"), Some(&Value::Null));
        assert_eq!(ds.value(0, "id"), Some(&Value::Int(1)));
        assert_eq!(ds.value(9, "id"), None);
    }

    #[test]
    fn test_select_rows_preserves_order_and_values() {
        let ds = sample();
        let subset = ds.select_rows([0, 2]);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.columns(), ds.columns());
        assert_eq!(subset.get_row(0), ds.get_row(0));
        assert_eq!(subset.get_row(1), ds.get_row(2));
    }

    #[test]
    fn test_select_rows_ignores_out_of_range() {
        let ds = sample();
        let subset = ds.select_rows([1, 99]);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.get_row(0), ds.get_row(1));
    }
}
