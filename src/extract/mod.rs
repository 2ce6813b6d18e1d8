//! Field extraction from the report's plain text.
//!
//! The report is scanned line by line with the rules in [`rules`]; the date
//! comes from the dateline anywhere in the document. Extraction never fails
//! on missing data, only on a dateline that names an impossible date.

pub mod date;
pub mod rules;
pub mod text;

pub use date::parse_report_date;
pub use rules::{apply_rules, LineRule, ScanLine, LINE_RULES};
pub use text::{normalize, numeric_tokens};

use crate::document;
use crate::error::Result;
use crate::models::{ExtractedReport, Field};
use std::path::Path;
use tracing::{debug, warn};

/// Extract the report date and variation fields from document text.
pub fn extract_report(text: &str) -> Result<ExtractedReport> {
    let normalized = normalize(text);

    let mut report = ExtractedReport {
        date: parse_report_date(&normalized)?,
        ..Default::default()
    };
    if report.date.is_none() {
        warn!("report dateline not found");
    }

    for raw in text.lines() {
        let line = ScanLine::new(raw);
        let fired = apply_rules(&line, &mut report);
        if !fired.is_empty() {
            debug!(line = raw.trim(), rules = ?fired, "matched report line");
        }
    }

    zero_fallback(&normalized, &mut report);

    let missing = report.missing();
    if !missing.is_empty() {
        warn!(?missing, "no value found, defaulting to 0.0");
    }
    Ok(report)
}

/// Extract a report from the PDF at `path`.
pub fn extract_report_from_path(path: &Path) -> Result<ExtractedReport> {
    extract_report(&document::extract_text(path))
}

/// Keyword whose presence lets [`zero_fallback`] zero an empty field.
pub fn fallback_keyword(field: Field) -> &'static str {
    match field {
        Field::Fuel93 => " 93 ",
        Field::Fuel97 => " 97 ",
        Field::Diesel => "diesel",
        Field::Kerosene => "kerosene",
        Field::Lpg => "glp",
    }
}

/// Zero an empty field when the report names it and prints a `0,0` somewhere.
///
/// Has no observable effect: [`ExtractedReport::into_record`] zeroes every
/// empty slot regardless. It only matters if that default is ever dropped.
fn zero_fallback(normalized: &str, report: &mut ExtractedReport) {
    if !normalized.contains("0,0") {
        return;
    }
    for field in Field::ALL {
        if normalized.contains(fallback_keyword(field)) {
            report.fill(field, 0.0);
        }
    }
}
