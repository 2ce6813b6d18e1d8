use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Field: one of the five tracked price variations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Fuel93,
    Fuel97,
    Diesel,
    Kerosene,
    Lpg,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Fuel93,
        Field::Fuel97,
        Field::Diesel,
        Field::Kerosene,
        Field::Lpg,
    ];

    /// Ledger column holding this field.
    pub fn column(self) -> &'static str {
        match self {
            Field::Fuel93 => "gasolina_93",
            Field::Fuel97 => "gasolina_97",
            Field::Diesel => "diesel",
            Field::Kerosene => "kerosene",
            Field::Lpg => "glp",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// ExtractedReport: raw extraction result, every slot optional
// ---------------------------------------------------------------------------

/// What the field extractor recovered from one report.
///
/// Each value slot is written at most once through [`ExtractedReport::fill`];
/// the first line that yields a value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedReport {
    pub date: Option<NaiveDate>,
    pub fuel_93: Option<f64>,
    pub fuel_97: Option<f64>,
    pub diesel: Option<f64>,
    pub kerosene: Option<f64>,
    pub lpg: Option<f64>,
}

impl ExtractedReport {
    pub fn get(&self, field: Field) -> Option<f64> {
        *self.slot(field)
    }

    /// Store `value` unless the slot already holds one. Returns whether it was stored.
    pub fn fill(&mut self, field: Field, value: f64) -> bool {
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Fields no line produced a value for.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Default every empty slot to `0.0` and render the date as ISO text.
    pub fn into_record(self) -> ReportRecord {
        ReportRecord {
            date: self.date.map(|d| d.format("%Y-%m-%d").to_string()),
            fuel_93: self.fuel_93.unwrap_or(0.0),
            fuel_97: self.fuel_97.unwrap_or(0.0),
            diesel: self.diesel.unwrap_or(0.0),
            kerosene: self.kerosene.unwrap_or(0.0),
            lpg: self.lpg.unwrap_or(0.0),
        }
    }

    fn slot(&self, field: Field) -> &Option<f64> {
        match field {
            Field::Fuel93 => &self.fuel_93,
            Field::Fuel97 => &self.fuel_97,
            Field::Diesel => &self.diesel,
            Field::Kerosene => &self.kerosene,
            Field::Lpg => &self.lpg,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::Fuel93 => &mut self.fuel_93,
            Field::Fuel97 => &mut self.fuel_97,
            Field::Diesel => &mut self.diesel,
            Field::Kerosene => &mut self.kerosene,
            Field::Lpg => &mut self.lpg,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportRecord: one ledger row
// ---------------------------------------------------------------------------

/// One row of the ledger, keyed by report date.
///
/// `date` is ISO 8601 text; it is `None` only for reports whose date line
/// could not be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "fecha")]
    pub date: Option<String>,
    #[serde(rename = "gasolina_93")]
    pub fuel_93: f64,
    #[serde(rename = "gasolina_97")]
    pub fuel_97: f64,
    pub diesel: f64,
    pub kerosene: f64,
    #[serde(rename = "glp")]
    pub lpg: f64,
}

impl ReportRecord {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Fuel93 => self.fuel_93,
            Field::Fuel97 => self.fuel_97,
            Field::Diesel => self.diesel,
            Field::Kerosene => self.kerosene,
            Field::Lpg => self.lpg,
        }
    }

    /// Date text as printed in status lines.
    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or("sin fecha")
    }
}
