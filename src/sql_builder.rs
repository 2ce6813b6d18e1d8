//! Small parameterized SELECT builder for ledger reads.
//!
//! Values always go through DuckDB's parameter binding (`?` placeholders),
//! never through string interpolation; dates read from the command line or a
//! dashboard can be passed straight in.
//!
//! # Example
//!
//! ```rust
//! use fuelwatch::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("ledger")
//!     .where_gte("fecha", "2025-01-01")
//!     .order_by(&["fecha ASC"])
//!     .limit(10)
//!     .build();
//! ```

/// Builds parameterized SELECT statements. Methods return `&mut Self` for chaining.
pub struct SqlBuilder {
    select_cols: Vec<String>,
    from_table: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
}

impl SqlBuilder {
    /// Create a builder targeting the given table.
    pub fn new(table: &str) -> Self {
        Self {
            select_cols: vec!["*".to_string()],
            from_table: table.to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
        }
    }

    /// Set the columns to select (replaces the default `*`).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a raw WHERE condition with a `?` placeholder per entry of `params`.
    pub fn where_clause(&mut self, condition: &str, params: &[&str]) -> &mut Self {
        self.where_clauses.push(condition.to_string());
        self.params.extend(params.iter().map(|p| p.to_string()));
        self
    }

    /// `{column} = ?`
    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{} = ?", column), &[value])
    }

    /// `{column} >= ?`
    pub fn where_gte(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{} >= ?", column), &[value])
    }

    /// `{column} <= ?`
    pub fn where_lte(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{} <= ?", column), &[value])
    }

    /// `{column} IS NOT NULL`
    pub fn where_not_null(&mut self, column: &str) -> &mut Self {
        self.where_clause(&format!("{} IS NOT NULL", column), &[])
    }

    /// Add ORDER BY clauses (e.g. `"fecha ASC"`, `"fecha DESC NULLS LAST"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_cols
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the final SQL string and parameter list.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut parts = vec![
            format!("SELECT {}", self.select_cols.join(", ")),
            format!("FROM {}", self.from_table),
        ];

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if !self.order_by_cols.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_cols.join(", ")));
        }

        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        (parts.join("\n"), self.params.clone())
    }
}
