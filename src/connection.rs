//! DuckDB connection wrapper used to read, reshape and write the CSV ledger.
//!
//! The ledger lives in an in-memory table while a run works on it; CSV files
//! are only touched by [`Connection::load_csv`] and [`Connection::copy_to_csv`].

use crate::error::Result;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wraps an in-memory DuckDB database.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open an in-memory DuckDB database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: DuckDbConnection::open_in_memory()?,
        })
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run
        let column_names: Vec<String> = match rows.as_ref() {
            Some(stmt) => stmt
                .column_names()
                .into_iter()
                .map(|s| s.to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, name) in column_names.iter().enumerate() {
                map.insert(name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        self.execute(sql, params)?
            .into_iter()
            .map(|row| -> Result<T> {
                let value = serde_json::Value::Object(row.into_iter().collect());
                Ok(serde_json::from_value(value)?)
            })
            .collect()
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        match rows.next()? {
            Some(row) => Ok(Some(convert_value_ref(row.get_ref(0)?))),
            None => Ok(None),
        }
    }

    /// Run one or more statements that return no rows.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Create `table` from a headed CSV file with a fixed column schema.
    ///
    /// `columns` pairs each column name with its DuckDB type, so an empty or
    /// header-only file still produces a correctly typed table.
    pub fn load_csv(&self, table: &str, path: &Path, columns: &[(&str, &str)]) -> Result<()> {
        let path_str = sql_path(path);
        let schema = columns
            .iter()
            .map(|(name, ty)| format!("'{}': '{}'", name, ty))
            .collect::<Vec<_>>()
            .join(", ");

        self.conn.execute_batch(&format!(
            "CREATE OR REPLACE TABLE {} AS \
             SELECT * FROM read_csv('{}', header = true, delim = ',', columns = {{{}}})",
            table, path_str, schema
        ))?;
        debug!(table, path = %path_str, "loaded CSV");
        Ok(())
    }

    /// Write the result of `query` to `path` as a headed, comma-separated CSV.
    pub fn copy_to_csv(&self, query: &str, path: &Path) -> Result<()> {
        let path_str = sql_path(path);
        self.conn.execute_batch(&format!(
            "COPY ({}) TO '{}' (FORMAT csv, HEADER true, DELIMITER ',')",
            query, path_str
        ))?;
        debug!(path = %path_str, "wrote CSV");
        Ok(())
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Forward-slashed path with single quotes escaped, for use inside SQL literals.
fn sql_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").replace('\'', "''")
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => serde_json::Value::Number(i.into()),
            Err(_) => serde_json::Value::String(n.to_string()),
        },
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()),
        // Ledger columns are VARCHAR and DOUBLE only
        _ => serde_json::Value::Null,
    }
}
