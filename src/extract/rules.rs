//! Line rules that map a report line to one or more variation fields.
//!
//! Rules are tried in table order for each line. A claiming rule that fires
//! ends the scan of that line, so the dual-grade row is never re-read by the
//! single-grade rules. The two single-grade rules at the end do not claim:
//! both may fire on the same line.

use super::text::{has_word, has_word_prefix, normalize, numeric_tokens};
use crate::models::{ExtractedReport, Field};

/// One report line in the forms the rules look at.
#[derive(Debug, Clone)]
pub struct ScanLine {
    /// Lowercased, accents kept.
    pub lower: String,
    /// Lowercased, accents stripped.
    pub normalized: String,
    /// Numeric tokens of the normalized line.
    pub numbers: Vec<f64>,
}

impl ScanLine {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let numbers = numeric_tokens(&normalized);
        Self {
            lower: raw.to_lowercase(),
            normalized,
            numbers,
        }
    }
}

pub struct LineRule {
    pub name: &'static str,
    pub mentions: fn(&ScanLine) -> bool,
    /// Fields filled from the line's numbers, in order.
    pub targets: &'static [Field],
    pub claims_line: bool,
}

impl LineRule {
    fn applies(&self, line: &ScanLine) -> bool {
        line.numbers.len() >= self.targets.len() && (self.mentions)(line)
    }
}

fn mentions_both_grades(line: &ScanLine) -> bool {
    has_word_prefix(&line.normalized, "93") && has_word_prefix(&line.normalized, "97")
}

fn mentions_diesel(line: &ScanLine) -> bool {
    has_word_prefix(&line.normalized, "diesel") || has_word_prefix(&line.lower, "diésel")
}

fn mentions_kerosene(line: &ScanLine) -> bool {
    line.normalized.contains("kerosene") || line.normalized.contains("parafina")
}

fn mentions_lpg(line: &ScanLine) -> bool {
    let ln = &line.normalized;
    has_word(ln, "glp") || ln.contains("glp de uso vehicular") || ln.contains("gas licuado")
}

fn mentions_93(line: &ScanLine) -> bool {
    has_word(&line.normalized, "93")
}

fn mentions_97(line: &ScanLine) -> bool {
    has_word(&line.normalized, "97")
}

/// Rule table in precedence order.
pub static LINE_RULES: [LineRule; 6] = [
    LineRule {
        name: "dual grade",
        mentions: mentions_both_grades,
        targets: &[Field::Fuel93, Field::Fuel97],
        claims_line: true,
    },
    LineRule {
        name: "diesel",
        mentions: mentions_diesel,
        targets: &[Field::Diesel],
        claims_line: true,
    },
    LineRule {
        name: "kerosene",
        mentions: mentions_kerosene,
        targets: &[Field::Kerosene],
        claims_line: true,
    },
    LineRule {
        name: "lpg",
        mentions: mentions_lpg,
        targets: &[Field::Lpg],
        claims_line: true,
    },
    LineRule {
        name: "single 93",
        mentions: mentions_93,
        targets: &[Field::Fuel93],
        claims_line: false,
    },
    LineRule {
        name: "single 97",
        mentions: mentions_97,
        targets: &[Field::Fuel97],
        claims_line: false,
    },
];

/// Run every rule against `line`, filling empty slots of `report`.
///
/// Returns the names of the rules that fired.
pub fn apply_rules(line: &ScanLine, report: &mut ExtractedReport) -> Vec<&'static str> {
    let mut fired = Vec::new();
    for rule in &LINE_RULES {
        if !rule.applies(line) {
            continue;
        }
        for (field, value) in rule.targets.iter().zip(&line.numbers) {
            report.fill(*field, *value);
        }
        fired.push(rule.name);
        if rule.claims_line {
            break;
        }
    }
    fired
}
