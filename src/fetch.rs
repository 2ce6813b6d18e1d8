//! Listing resolution and report download.
//!
//! Finds the most recent weekly report on the ENAP listing page and saves the
//! document to a fixed scratch file inside the data directory. Every request
//! carries the same identifying user agent; nothing is retried.

use crate::config;
use crate::error::{FuelWatchError, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use scraper::{Html, Selector};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;

/// Resolves and downloads the weekly price report.
pub struct ReportFetcher {
    /// Site root the listing URL and relative report links are built from.
    pub base_url: String,
    /// Directory holding the scratch document.
    pub data_dir: PathBuf,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl ReportFetcher {
    /// Create a fetcher rooted at `base_url`, storing downloads in `data_dir`.
    ///
    /// Creates the data directory if it does not exist. `timeout` of `None`
    /// lets requests run for as long as the server keeps the connection open.
    pub fn new(base_url: &str, data_dir: PathBuf, timeout: Option<Duration>) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            data_dir,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        let client = match self.client.take() {
            Some(client) => client,
            None => Client::builder()
                .user_agent(config::USER_AGENT)
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?,
        };
        Ok(self.client.insert(client))
    }

    /// Location the downloaded report is written to.
    pub fn scratch_path(&self) -> PathBuf {
        self.data_dir.join(config::SCRATCH_FILE)
    }

    /// URL of the listing page for `year`.
    pub fn listing_url(&self, year: i32) -> String {
        config::listing_url(&self.base_url, year)
    }

    /// Fetch the listing page for `year` and return the absolute URL of the
    /// first report document linked from it.
    pub fn latest_report_url(&mut self, year: i32) -> Result<String> {
        let listing_url = self.listing_url(year);
        debug!(url = %listing_url, "fetching report listing");

        let client = self.client()?.clone();
        let html = client.get(&listing_url).send()?.error_for_status()?.text()?;

        let url = find_report_link(&html, &self.base_url)?.ok_or_else(|| {
            FuelWatchError::ReportLinkNotFound {
                listing_url: listing_url.clone(),
                fragment: config::DOCUMENT_PATH_FRAGMENT.to_string(),
            }
        })?;
        debug!(%url, "resolved latest report");
        Ok(url)
    }

    /// Download `url` into the scratch file, replacing any earlier copy.
    ///
    /// The body is stored as-is; whether it really is a PDF is only discovered
    /// when text extraction comes up empty.
    pub fn download_report(&mut self, url: &str) -> Result<PathBuf> {
        let dest = self.scratch_path();
        debug!(%url, dest = %dest.display(), "downloading report");

        let client = self.client()?.clone();
        let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
        write_replacing(&self.data_dir, &dest, &bytes)?;

        debug!(bytes = bytes.len(), "report saved");
        Ok(dest)
    }

    /// Drop the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// Find the first anchor pointing at a report document and make it absolute.
///
/// Returns `Ok(None)` when the page links no document. Relative links are
/// joined onto `base_url`; absolute links are returned unchanged.
pub fn find_report_link(html: &str, base_url: &str) -> Result<Option<String>> {
    let selector = Selector::parse(&format!(
        "a[href*='{}']",
        config::DOCUMENT_PATH_FRAGMENT
    ))
    .map_err(|e| FuelWatchError::Selector(e.to_string()))?;

    let document = Html::parse_document(html);
    let Some(href) = document
        .select(&selector)
        .find_map(|a| a.value().attr("href"))
    else {
        return Ok(None);
    };

    let base = Url::parse(base_url)
        .map_err(|e| FuelWatchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    let resolved = base
        .join(href.trim())
        .map_err(|e| FuelWatchError::InvalidUrl(format!("{}: {}", href, e)))?;
    Ok(Some(resolved.to_string()))
}

/// Write `bytes` next to `dest` and rename over it once complete.
pub(crate) fn write_replacing(dir: &Path, dest: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(dest)?;
    Ok(())
}
