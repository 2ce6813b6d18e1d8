use std::collections::HashMap;
use std::path::PathBuf;

pub const ENAP_BASE: &str = "https://www.enap.cl";
pub const LISTING_PATH: &str = "/archivos/8/informe-semanal-de-precios";

/// Path fragment shared by every downloadable report link on the listing page.
pub const DOCUMENT_PATH_FRAGMENT: &str = "/files/get/";

pub const USER_AGENT: &str = "Mozilla/5.0 (FuelWatch-CL)";

pub const LEDGER_FILE: &str = "variaciones_semana.csv";
pub const SCRATCH_FILE: &str = "latest.pdf";

/// Ledger columns, in file order.
pub const LEDGER_COLUMNS: [&str; 6] = [
    "fecha",
    "gasolina_93",
    "gasolina_97",
    "diesel",
    "kerosene",
    "glp",
];

pub const DATA_DIR_ENV: &str = "FUELWATCH_DATA_DIR";
pub const BASE_URL_ENV: &str = "FUELWATCH_BASE_URL";

pub fn spanish_months() -> HashMap<&'static str, u32> {
    HashMap::from([
        ("enero", 1),
        ("febrero", 2),
        ("marzo", 3),
        ("abril", 4),
        ("mayo", 5),
        ("junio", 6),
        ("julio", 7),
        ("agosto", 8),
        ("septiembre", 9),
        ("octubre", 10),
        ("noviembre", 11),
        ("diciembre", 12),
    ])
}

/// Build the listing page URL for a given publication year.
pub fn listing_url(base: &str, year: i32) -> String {
    format!(
        "{}{}?year={}",
        base.trim_end_matches('/'),
        LISTING_PATH,
        year
    )
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
