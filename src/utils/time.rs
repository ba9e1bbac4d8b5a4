//! Time utilities: parsing HH:MM:SS, duration formatting at several
//! granularities.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time_hms(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

pub fn parse_time_hm(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time_hms(s: &str) -> AppResult<NaiveTime> {
    parse_time_hms(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// `HH:MM`, minutes floor-truncated from total seconds.
pub fn format_hhmm(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let mins = secs.abs() / 60;
    format!("{}{:02}:{:02}", sign, mins / 60, mins % 60)
}

/// `HH:MM:SS` at full second precision.
pub fn format_hhmmss(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

pub fn decimal_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}
