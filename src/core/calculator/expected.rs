use crate::models::schedule::{HolidaySet, WorkdaySchedule};
use chrono::NaiveDate;

/// Expected seconds for a date: zero on holidays, otherwise the weekday
/// value of the schedule.
pub fn expected_seconds(date: NaiveDate, schedule: &WorkdaySchedule, holidays: &HolidaySet) -> i64 {
    schedule.expected_minutes(date, holidays) * 60
}
