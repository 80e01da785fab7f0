use chrono::{DateTime, Utc};

const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Seconds with nanosecond precision, e.g. `0.123456789s`.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0.000000000s".to_string();
    }
    format!("{seconds:.9}s")
}

pub fn format_generated(at: DateTime<Utc>) -> String {
    at.format(GENERATED_FORMAT).to_string()
}

/// Rounds a percentage to the nearest whole number for display.
pub fn format_whole_percent(pct: f64) -> String {
    format!("{pct:.0}%")
}
