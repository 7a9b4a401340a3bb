use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Wall-clock "now" used by the time-window projections.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format an event day with a user-configurable chrono pattern.
/// An invalid pattern falls back to ISO `YYYY-MM-DD`.
pub fn format_day(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Alert timestamps, shown in local time (`Mar 9, 2:30 PM`).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%b %-d, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_days_only() {
        assert_eq!(parse_date("2025-03-09"), NaiveDate::from_ymd_opt(2025, 3, 9));
        assert_eq!(parse_date("09/03/2025"), None);
    }

    #[test]
    fn bad_pattern_falls_back_to_iso() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_day(d, "%A, %B %-d"), "Sunday, March 9");
        assert_eq!(format_day(d, "%Q"), "2025-03-09");
    }
}
