//! Number formatting for chart labels.


/// Format number with the appropriate magnitude suffix.
pub fn format_number(num: i64) -> String {
    let magnitude = num.unsigned_abs();
    let sign = if num < 0 { "-" } else { "" };

    if magnitude >= 1_000_000_000 {
        format!("{sign}{:.1}bn", magnitude as f64 / 1_000_000_000.0)
    } else if magnitude >= 1_000_000 {
        format!("{sign}{:.1}M", magnitude as f64 / 1_000_000.0)
    } else if magnitude >= 1_000 {
        format!("{sign}{:.1}K", magnitude as f64 / 1_000.0)
    } else {
        format!("{}", num)
    }
}
