//! FuelWatch: weekly ENAP fuel price variations as a CSV ledger.
//!
//! Each run resolves the newest "Informe semanal de precios" on enap.cl,
//! downloads the PDF, reads the report date and the variations for gasoline
//! 93 and 97, diesel, kerosene and LPG out of its text, and appends them to
//! `variaciones_semana.csv` unless that week is already there.
//!
//! # Quick start
//!
//! ```no_run
//! use fuelwatch::FuelWatch;
//!
//! let mut watch = FuelWatch::builder().data_dir("data").build().unwrap();
//! let outcome = watch.run().unwrap();
//! println!("{}", outcome);
//! ```

pub mod config;
pub mod connection;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod ledger;
pub mod models;
pub mod sql_builder;

pub use connection::Connection;
pub use error::{FailureKind, FuelWatchError, Result};
pub use extract::extract_report;
pub use fetch::ReportFetcher;
pub use ledger::{Ledger, LedgerUpdate};
pub use models::{ExtractedReport, Field, ReportRecord};
pub use sql_builder::SqlBuilder;

use chrono::Datelike;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

// ---------------------------------------------------------------------------
// FuelWatchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FuelWatch`] run.
///
/// Use [`FuelWatch::builder()`] for plain defaults or
/// [`FuelWatchBuilder::from_env()`] to honour `FUELWATCH_DATA_DIR` and
/// `FUELWATCH_BASE_URL`.
pub struct FuelWatchBuilder {
    data_dir: Option<PathBuf>,
    base_url: String,
    timeout: Option<Duration>,
    year: Option<i32>,
}

impl Default for FuelWatchBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            base_url: config::ENAP_BASE.to_string(),
            timeout: None,
            year: None,
        }
    }
}

impl FuelWatchBuilder {
    /// Start from defaults overridden by environment variables, where set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(dir) = std::env::var(config::DATA_DIR_ENV) {
            if !dir.is_empty() {
                builder.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(url) = std::env::var(config::BASE_URL_ENV) {
            if !url.is_empty() {
                builder.base_url = url;
            }
        }
        builder
    }

    /// Directory holding the ledger and the downloaded report.
    ///
    /// Defaults to `data` under the working directory. Created if missing.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Site root for the listing page and relative report links.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Limit each HTTP request to `timeout`. Unlimited by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the listing for `year` instead of the current year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Build the runner, creating the data directory.
    pub fn build(self) -> Result<FuelWatch> {
        let data_dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        let fetcher = ReportFetcher::new(&self.base_url, data_dir.clone(), self.timeout)?;
        Ok(FuelWatch {
            data_dir,
            fetcher,
            year: self.year,
        })
    }
}

// ---------------------------------------------------------------------------
// FuelWatch
// ---------------------------------------------------------------------------

/// One configured batch job: resolve, download, extract, record.
pub struct FuelWatch {
    data_dir: PathBuf,
    fetcher: ReportFetcher,
    year: Option<i32>,
}

impl FuelWatch {
    /// Create a new builder with default settings.
    pub fn builder() -> FuelWatchBuilder {
        FuelWatchBuilder::default()
    }

    /// Run the whole job once.
    ///
    /// Any network, calendar or ledger failure aborts the run before the
    /// ledger is written. An unreadable document does not: it simply yields
    /// an all-zero, undated record.
    pub fn run(&mut self) -> Result<LedgerUpdate> {
        let year = self.listing_year();
        let url = self.fetcher.latest_report_url(year)?;
        let path = self.fetcher.download_report(&url)?;

        let record = extract::extract_report_from_path(&path)?.into_record();
        info!(date = record.date_label(), %url, "report parsed");

        self.ledger()?.record(&record)
    }

    /// Open the ledger in this run's data directory.
    pub fn ledger(&self) -> Result<Ledger> {
        Ledger::in_dir(&self.data_dir)
    }

    /// Year whose listing page is read.
    pub fn listing_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Access the report fetcher for step-by-step use.
    pub fn fetcher_mut(&mut self) -> &mut ReportFetcher {
        &mut self.fetcher
    }
}

impl fmt::Display for FuelWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FuelWatch(base_url={}, data_dir={}, year={})",
            self.fetcher.base_url,
            self.data_dir.display(),
            self.listing_year()
        )
    }
}
