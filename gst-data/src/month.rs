//! Month-name formatting.

use chrono::NaiveDate;

/// Full English month name for a 1-based month, e.g. `1` -> `"January"`.
/// Returns None outside 1-12.
pub fn month_name(month: u32) -> Option<String> {
    // The year is arbitrary; only the month matters for %B.
    NaiveDate::from_ymd_opt(2000, month, 1).map(|d| d.format("%B").to_string())
}
