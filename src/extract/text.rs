//! Text normalization and token helpers shared by the date and line scanners.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Signed number with a decimal comma and exactly one fractional digit,
/// e.g. `+12,3`, `-18,3`, `0,0`.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?[0-9]+,[0-9]").expect("number pattern"));

/// Lowercase `s` with diacritics removed (`"Diésel"` → `"diesel"`).
///
/// Applies NFKD and drops every combining mark before lowercasing.
pub fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect::<String>()
        .to_lowercase()
}

/// All decimal-comma numbers in `s`, in order of appearance.
pub fn numeric_tokens(s: &str) -> Vec<f64> {
    NUMBER
        .find_iter(s)
        .filter_map(|m| m.as_str().replace(',', ".").parse().ok())
        .collect()
}

/// `token` appears as a whole whitespace-separated word of `line`.
pub fn has_word(line: &str, token: &str) -> bool {
    line.split_whitespace().any(|w| w == token)
}

/// Some word of `line` starts with `prefix` (`"93/97"` mentions `93`).
pub fn has_word_prefix(line: &str, prefix: &str) -> bool {
    line.split_whitespace().any(|w| w.starts_with(prefix))
}
