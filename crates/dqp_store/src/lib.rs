//! SQLite persistence for the clean subset.
//!
//! The loader owns the output store for the duration of the load step and
//! writes with full-table-replace semantics: the destination table is
//! dropped and recreated inside a single transaction, never appended to or
//! upserted. The persisted table carries exactly the dataset's columns — no
//! metadata columns are added.
//!
//! # Example
//!
//! ```no_run
//! use dqp_core::{Dataset, Loader};
//! use dqp_store::SqliteLoader;
//!
//! let loader = SqliteLoader::new("data/activity.db");
//! let dataset = Dataset::new(vec!["Id".into(), "Date".into()]);
//! let rows = loader.load(&dataset, "daily_activity")?;
//! # Ok::<(), dqp_core::PipelineError>(())
//! ```

use dqp_core::{Dataset, Loader, PipelineError, Result, Value};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load adapter writing into a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteLoader {
    db_path: PathBuf,
}

impl SqliteLoader {
    /// Creates a loader for the database at `db_path`. The file is created
    /// on first load if it does not exist.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }
}

impl Loader for SqliteLoader {
    fn load(&self, dataset: &Dataset, table: &str) -> Result<usize> {
        let mut conn =
            Connection::open(&self.db_path).map_err(|e| PipelineError::load(table, e))?;
        let tx = conn
            .transaction()
            .map_err(|e| PipelineError::load(table, e))?;

        let quoted_table = quote_identifier(table);
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {quoted_table}"))
            .map_err(|e| PipelineError::load(table, e))?;

        let column_defs: Vec<String> = dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    "{} {}",
                    quote_identifier(name),
                    column_affinity(dataset, i)
                )
            })
            .collect();
        tx.execute_batch(&format!(
            "CREATE TABLE {quoted_table} ({})",
            column_defs.join(", ")
        ))
        .map_err(|e| PipelineError::load(table, e))?;

        let placeholders = vec!["?"; dataset.columns().len()].join(", ");
        let insert = format!("INSERT INTO {quoted_table} VALUES ({placeholders})");
        {
            let mut stmt = tx
                .prepare(&insert)
                .map_err(|e| PipelineError::load(table, e))?;
            for row in dataset.rows() {
                let params = rusqlite::params_from_iter(row.values().iter().map(to_sql_value));
                stmt.execute(params)
                    .map_err(|e| PipelineError::load(table, e))?;
            }
        }

        tx.commit().map_err(|e| PipelineError::load(table, e))?;

        debug!(
            "replaced table '{}' with {} row(s) in {}",
            table,
            dataset.len(),
            self.db_path.display()
        );
        Ok(dataset.len())
    }
}

/// Converts a dataset value into a SQLite value.
fn to_sql_value(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::String(s) => rusqlite::types::Value::Text(s.clone()),
        Value::Int(i) => rusqlite::types::Value::Integer(*i),
        Value::Float(f) => rusqlite::types::Value::Real(*f),
    }
}

/// Picks the column type from the non-null values of one column:
/// all-integer columns map to INTEGER, numeric columns with floats to REAL,
/// everything else to TEXT.
fn column_affinity(dataset: &Dataset, column: usize) -> &'static str {
    let mut affinity = None;
    for row in dataset.rows() {
        let next = match row.get(column) {
            Some(Value::Null) | None => continue,
            Some(Value::Int(_)) => "INTEGER",
            Some(Value::Float(_)) => "REAL",
            Some(Value::String(_)) => "TEXT",
        };
        affinity = Some(match (affinity, next) {
            (None, n) => n,
            (Some("INTEGER"), "REAL") | (Some("REAL"), "INTEGER") => "REAL",
            (Some(current), n) if current == n => current,
            _ => return "TEXT",
        });
    }
    affinity.unwrap_or("TEXT")
}

/// Quotes a SQL identifier, escaping embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqp_core::Row;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn activity_dataset() -> Dataset {
        Dataset::from_rows(
            vec!["Id".into(), "Date".into(), "SedentaryMinutes".into()],
            vec![
                Row::new(vec![
                    Value::Int(1001),
                    Value::String("2022-01-01".into()),
                    Value::Int(728),
                ]),
                Row::new(vec![
                    Value::Int(1002),
                    Value::String("2022-01-02".into()),
                    Value::Null,
                ]),
            ],
        )
    }

    #[test]
    fn test_load_writes_all_rows_and_values() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("out.db");
        let loader = SqliteLoader::new(&db_path);

        let written = loader.load(&activity_dataset(), "daily_activity").unwrap();
        assert_eq!(written, 2);

        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM daily_activity", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (id, date): (i64, String) = conn
            .query_row(
                "SELECT Id, Date FROM daily_activity ORDER BY Id LIMIT 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(id, 1001);
        assert_eq!(date, "2022-01-01");

        let nulls: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM daily_activity WHERE SedentaryMinutes IS NULL",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test]
    fn test_load_replaces_existing_table() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("out.db");
        let loader = SqliteLoader::new(&db_path);

        loader.load(&activity_dataset(), "daily_activity").unwrap();
        // Second load must replace, not append
        loader.load(&activity_dataset(), "daily_activity").unwrap();

        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM daily_activity", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_load_empty_dataset_creates_empty_table() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("out.db");
        let loader = SqliteLoader::new(&db_path);

        let dataset = Dataset::new(vec!["Id".into(), "Date".into()]);
        let written = loader.load(&dataset, "daily_activity").unwrap();
        assert_eq!(written, 0);

        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM daily_activity", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_column_affinity_inference() {
        let dataset = Dataset::from_rows(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            vec![
                Row::new(vec![
                    Value::Int(1),
                    Value::Float(0.5),
                    Value::String("x".into()),
                    Value::Null,
                ]),
                Row::new(vec![
                    Value::Int(2),
                    Value::Int(3),
                    Value::String("y".into()),
                    Value::Null,
                ]),
            ],
        );
        assert_eq!(column_affinity(&dataset, 0), "INTEGER");
        assert_eq!(column_affinity(&dataset, 1), "REAL");
        assert_eq!(column_affinity(&dataset, 2), "TEXT");
        assert_eq!(column_affinity(&dataset, 3), "TEXT");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("Id"), "\"Id\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_load_unwritable_path_is_fault() {
        let loader = SqliteLoader::new("/nonexistent/dir/out.db");
        let result = loader.load(&activity_dataset(), "daily_activity");
        assert!(matches!(result, Err(PipelineError::Load { .. })));
    }
}
