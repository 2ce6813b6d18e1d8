//! Report date recovery from the dateline, e.g. `Santiago, 22 de octubre de 2025`.

use crate::config;
use crate::error::{FuelWatchError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATELINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"santiago,\s+([0-9]{1,2})\s+de\s+(\w+)\s+de\s+([0-9]{4})").expect("dateline pattern")
});

/// Find the report date in already-normalized text.
///
/// Only the first dateline is considered. No dateline, or a month name
/// outside the Spanish calendar, gives `Ok(None)`. A dateline naming a day
/// the month does not have is an error.
pub fn parse_report_date(normalized: &str) -> Result<Option<NaiveDate>> {
    let Some(caps) = DATELINE.captures(normalized) else {
        return Ok(None);
    };

    let Some(&month) = config::spanish_months().get(&caps[2]) else {
        return Ok(None);
    };
    let (Ok(day), Ok(year)) = (caps[1].parse::<u32>(), caps[3].parse::<i32>()) else {
        return Ok(None);
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or(FuelWatchError::InvalidReportDate { year, month, day })
}
