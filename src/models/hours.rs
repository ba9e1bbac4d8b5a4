use crate::utils::time::{decimal_hours, format_hhmm, format_hhmmss};
use chrono::NaiveDate;
use serde::Serialize;

/// Hours accounting for one employee-day.
///
/// Durations are kept at second precision; the `HH:MM` strings used by the
/// report table are floor-truncated from the total seconds. Derived per
/// query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct HoursResult {
    pub cpf: String,
    pub name: String,
    pub company: String,
    pub date: NaiveDate,
    pub worked_secs: i64,
    pub overtime_secs: i64,
    pub shortfall_secs: i64,
}

impl HoursResult {
    pub fn worked_hhmm(&self) -> String {
        format_hhmm(self.worked_secs)
    }

    pub fn overtime_hhmm(&self) -> String {
        format_hhmm(self.overtime_secs)
    }

    pub fn shortfall_hhmm(&self) -> String {
        format_hhmm(self.shortfall_secs)
    }

    pub fn worked_hhmmss(&self) -> String {
        format_hhmmss(self.worked_secs)
    }

    pub fn worked_decimal_hours(&self) -> f64 {
        decimal_hours(self.worked_secs)
    }
}
