//! Shared fixtures for the FuelWatch integration tests.
//!
//! Provides report text shaped like the weekly ENAP PDF after text
//! extraction, and helpers that set up ledgers inside temp directories.

#![allow(dead_code)]

use fuelwatch::{Ledger, ReportRecord};
use std::fs;
use std::path::PathBuf;

/// Text of a typical report: dual-grade gasoline row, accented diesel, zeroed
/// kerosene and LPG.
pub const SAMPLE_REPORT: &str = "\
ENAP Refinerías
Informe semanal de precios
Santiago, 22 de octubre de 2025
Variación de precios de paridad ($/lt)
Gasolina automotriz 93 y 97 +1,2 -0,3
Diésel -2,5
Kerosene doméstico 0,0
GLP de uso vehicular 0,0
";

/// Ledger header as written to disk.
pub const HEADER: &str = "fecha,gasolina_93,gasolina_97,diesel,kerosene,glp";

pub fn record(date: &str, fuel_93: f64) -> ReportRecord {
    ReportRecord {
        date: Some(date.to_string()),
        fuel_93,
        fuel_97: 0.0,
        diesel: 0.0,
        kerosene: 0.0,
        lpg: 0.0,
    }
}

/// The record of [`SAMPLE_REPORT`].
pub fn sample_record() -> ReportRecord {
    ReportRecord {
        date: Some("2025-10-22".to_string()),
        fuel_93: 1.2,
        fuel_97: -0.3,
        diesel: -2.5,
        kerosene: 0.0,
        lpg: 0.0,
    }
}

/// Path of a not-yet-existing ledger inside a fresh temp directory.
///
/// Returns `(ledger_path, TempDir)`. Keep the `TempDir` alive for the test.
pub fn ledger_path() -> (PathBuf, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("variaciones_semana.csv");
    (path, tmp_dir)
}

/// Write `contents` as the ledger file and open it.
pub fn ledger_with(contents: &str) -> (Ledger, tempfile::TempDir) {
    let (path, tmp_dir) = ledger_path();
    fs::write(&path, contents).unwrap();
    (Ledger::open(&path).unwrap(), tmp_dir)
}

/// Dates of every ledger row, in file order.
pub fn dates(ledger: &Ledger) -> Vec<Option<String>> {
    ledger
        .records()
        .unwrap()
        .into_iter()
        .map(|r| r.date)
        .collect()
}
