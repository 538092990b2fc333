//! Date text helpers.
//!
//! Bets store dates as `MM/DD/YYYY` text. Native date pickers and some seed
//! files produce `YYYY-MM-DD`, which is rewritten by reordering fields. None of
//! these helpers check calendar validity beyond the digit ranges below.

use regex::Regex;
use std::sync::LazyLock;

// Digits are ASCII-only, as in the browser's regex engine.
static RE_US_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$")
        .expect("US date pattern is valid")
});
static RE_ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("ISO date pattern is valid")
});

/// `MM/DD/YYYY` with month 01-12 and day 01-31, on the trimmed input.
pub fn is_valid_mm_dd_yyyy(value: &str) -> bool {
    RE_US_DATE.is_match(value.trim())
}

/// `YYYY-MM-DD` shape only, on the trimmed input.
pub fn is_iso_yyyy_mm_dd(value: &str) -> bool {
    RE_ISO_DATE.is_match(value.trim())
}

/// Reorder `YYYY-MM-DD` into `MM/DD/YYYY`. Returns the input unchanged if it
/// does not have three non-empty fields.
pub fn iso_to_mm_dd_yyyy(iso: &str) -> String {
    let mut fields = iso.trim().split('-');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(yyyy), Some(mm), Some(dd))
            if !yyyy.is_empty() && !mm.is_empty() && !dd.is_empty() =>
        {
            format!("{mm}/{dd}/{yyyy}")
        }
        _ => iso.to_string(),
    }
}

pub fn normalize_date_input(value: &str) -> String {
    let v = value.trim();
    if is_iso_yyyy_mm_dd(v) {
        iso_to_mm_dd_yyyy(v)
    } else {
        v.to_string()
    }
}
