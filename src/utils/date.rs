use chrono::{DateTime, Local};

/// Day stamp used by deliveries and expenses: `DD-MM-YYYY`.
///
/// Rows are later sorted on this string as-is, so "descending by date"
/// is lexicographic (day first), not chronological.
pub fn day_stamp(at: &DateTime<Local>) -> String {
    at.format("%d-%m-%Y").to_string()
}
