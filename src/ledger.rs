//! The CSV ledger of weekly variations, one row per report date.
//!
//! The whole file is read into an in-memory DuckDB table when opened and
//! rewritten in full whenever a row is added. Rows are kept unique by
//! `fecha` and sorted ascending, with undated rows last.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::ReportRecord;
use crate::sql_builder::SqlBuilder;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TABLE: &str = "ledger";

/// Column types of the ledger file. `fecha` stays text so ISO dates sort as written.
const SCHEMA: [(&str, &str); 6] = [
    ("fecha", "VARCHAR"),
    ("gasolina_93", "DOUBLE"),
    ("gasolina_97", "DOUBLE"),
    ("diesel", "DOUBLE"),
    ("kerosene", "DOUBLE"),
    ("glp", "DOUBLE"),
];

/// Read projection; hand-edited empty cells read back as `0.0`.
const RECORD_COLUMNS: [&str; 6] = [
    "fecha",
    "COALESCE(gasolina_93, 0.0) AS gasolina_93",
    "COALESCE(gasolina_97, 0.0) AS gasolina_97",
    "COALESCE(diesel, 0.0) AS diesel",
    "COALESCE(kerosene, 0.0) AS kerosene",
    "COALESCE(glp, 0.0) AS glp",
];

// ---------------------------------------------------------------------------
// LedgerUpdate
// ---------------------------------------------------------------------------

/// Result of offering a record to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerUpdate {
    /// A row with this date already existed; the file was left untouched.
    AlreadyRecorded(String),
    /// The row was added and the file rewritten.
    Appended(String),
}

impl LedgerUpdate {
    /// Date label of the record the update concerned.
    pub fn date(&self) -> &str {
        match self {
            Self::AlreadyRecorded(date) | Self::Appended(date) => date,
        }
    }

    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended(_))
    }
}

impl fmt::Display for LedgerUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRecorded(date) => write!(f, "Semana ya registrada: {}", date),
            Self::Appended(date) => write!(f, "Agregada semana: {}", date),
        }
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// A loaded ledger bound to its backing CSV file.
pub struct Ledger {
    path: PathBuf,
    conn: Connection,
}

impl Ledger {
    /// Load the ledger at `path`, or start an empty one if the file is absent.
    ///
    /// Nothing is written until [`Ledger::record`] adds a row.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let conn = Connection::open_in_memory()?;

        if path.exists() {
            conn.load_csv(TABLE, &path, &SCHEMA)?;
        } else {
            let cols = SCHEMA
                .iter()
                .map(|(name, ty)| format!("{} {}", name, ty))
                .collect::<Vec<_>>()
                .join(", ");
            conn.execute_batch(&format!("CREATE TABLE {} ({})", TABLE, cols))?;
            debug!(path = %path.display(), "no ledger yet, starting empty");
        }

        Ok(Self { path, conn })
    }

    /// Open the ledger file inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(config::LEDGER_FILE))
    }

    /// Backing CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows.
    pub fn len(&self) -> Result<usize> {
        let count = self
            .conn
            .execute_scalar(&format!("SELECT COUNT(*) FROM {}", TABLE), &[])?
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Whether a row for `date` (ISO text) exists.
    pub fn contains(&self, date: &str) -> Result<bool> {
        let (sql, params) = SqlBuilder::new(TABLE)
            .select(&["COUNT(*)"])
            .where_eq("fecha", date)
            .build();
        let count = self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        Ok(count > 0)
    }

    /// All rows in ledger order.
    pub fn records(&self) -> Result<Vec<ReportRecord>> {
        let (sql, params) = SqlBuilder::new(TABLE)
            .select(&RECORD_COLUMNS)
            .order_by(&["fecha ASC NULLS LAST"])
            .build();
        self.conn.execute_into(&sql, &params)
    }

    /// Rows dated between `from` and `to`, both inclusive.
    pub fn between(&self, from: &str, to: &str) -> Result<Vec<ReportRecord>> {
        let (sql, params) = SqlBuilder::new(TABLE)
            .select(&RECORD_COLUMNS)
            .where_gte("fecha", from)
            .where_lte("fecha", to)
            .order_by(&["fecha ASC"])
            .build();
        self.conn.execute_into(&sql, &params)
    }

    /// Most recent dated row.
    pub fn latest(&self) -> Result<Option<ReportRecord>> {
        let (sql, params) = SqlBuilder::new(TABLE)
            .select(&RECORD_COLUMNS)
            .where_not_null("fecha")
            .order_by(&["fecha DESC"])
            .limit(1)
            .build();
        Ok(self.conn.execute_into(&sql, &params)?.into_iter().next())
    }

    /// Add `record` unless its date is already present, then rewrite the file.
    ///
    /// After appending, duplicate dates collapse to their last occurrence and
    /// rows are re-sorted. Undated records never match an existing row, but
    /// share a single undated slot in the dedupe, so the newest one replaces
    /// any earlier undated row.
    pub fn record(&self, record: &ReportRecord) -> Result<LedgerUpdate> {
        let label = record.date_label().to_string();

        if let Some(date) = record.date.as_deref() {
            if self.contains(date)? {
                info!(date, "week already recorded");
                return Ok(LedgerUpdate::AlreadyRecorded(label));
            }
        }

        self.conn.raw().execute(
            &format!("INSERT INTO {} VALUES (?, ?, ?, ?, ?, ?)", TABLE),
            duckdb::params![
                record.date,
                record.fuel_93,
                record.fuel_97,
                record.diesel,
                record.kerosene,
                record.lpg,
            ],
        )?;
        self.dedupe_and_sort()?;
        self.persist()?;

        info!(date = %label, path = %self.path.display(), "week appended");
        Ok(LedgerUpdate::Appended(label))
    }

    /// Keep the last row per `fecha` (insertion order) and sort by date.
    fn dedupe_and_sort(&self) -> Result<()> {
        let cols = SCHEMA.map(|(name, _)| name).join(", ");
        self.conn.execute_batch(&format!(
            "CREATE OR REPLACE TABLE {table} AS \
             SELECT {cols} FROM ( \
               SELECT *, row_number() OVER (PARTITION BY fecha ORDER BY seq DESC) AS rn \
               FROM (SELECT *, row_number() OVER () AS seq FROM {table}) \
             ) WHERE rn = 1 \
             ORDER BY fecha ASC NULLS LAST",
            table = TABLE,
            cols = cols
        ))
    }

    /// Rewrite the backing file from the table via a temp file in the same directory.
    fn persist(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let tmp = tempfile::Builder::new()
            .prefix(".ledger")
            .suffix(".csv")
            .tempfile_in(&dir)?
            .into_temp_path();

        let (query, _) = SqlBuilder::new(TABLE)
            .select(&config::LEDGER_COLUMNS)
            .order_by(&["fecha ASC NULLS LAST"])
            .build();
        self.conn.copy_to_csv(&query, &tmp)?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
