//! Time-of-day parsing for event start times.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Validate `HH:MM` and return it normalised (`9:05` -> `09:05`).
pub fn normalize_time(t: &str) -> AppResult<String> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}

pub fn normalize_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}
