//! Deterministic newest-first ordering.

use super::model::Record;

/// Stable sort by year, descending.
///
/// Years compare numerically on their leading digits; empty or non-numeric
/// years count as `0` and therefore land after every real year. Records
/// sharing a year keep their extraction order.
pub fn sort_by_year_desc<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| year_value(b.year()).cmp(&year_value(a.year())));
}

/// Numeric value of a year string; `0` when it has no leading digits.
pub fn year_value(year: &str) -> u64 {
    year.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d - b'0')))
}
