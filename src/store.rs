//! Statement Execution Seam
//! The pipeline talks to the table store only through [`StatementExecutor`].

use crate::trino::TrinoError;
use serde_json::Value;

/// A typed value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Varchar(String),
    Integer(i32),
    BigInt(i64),
    Double(f64),
    Null,
}

/// Everything a finished statement returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Rows affected, reported for DML.
    pub update_count: Option<u64>,
}

impl QueryOutput {
    /// First column of the first row, if any.
    pub fn scalar(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.first())
    }
}

/// Runs SQL against the table store, one statement at a time.
pub trait StatementExecutor {
    /// Execute `sql` with `params` bound positionally to its `?` placeholders
    /// and wait for it to finish.
    fn execute_with(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryOutput, TrinoError>;

    fn execute(&mut self, sql: &str) -> Result<QueryOutput, TrinoError> {
        self.execute_with(sql, &[])
    }
}

impl<T: StatementExecutor + ?Sized> StatementExecutor for &mut T {
    fn execute_with(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryOutput, TrinoError> {
        (**self).execute_with(sql, params)
    }
}
