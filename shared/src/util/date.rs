//! Display formatting for backend timestamps

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Short calendar date for a backend timestamp, e.g. `2024/3/7`.
///
/// Accepts RFC 3339 timestamps, zone-less ISO date-times (the backend's
/// `LocalDateTime` form) and bare dates. Returns `None` for anything else.
pub fn display_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%Y/%-m/%-d").to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
