use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Expected paid minutes per weekday (Mon..Sun).
///
/// Configuration, not per-employee state; a holiday overrides the weekday
/// value to zero regardless of the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdaySchedule {
    minutes: [i64; 7],
}

impl WorkdaySchedule {
    pub fn from_minutes(minutes: [i64; 7]) -> Self {
        Self { minutes }
    }

    /// Mon-Fri working week, Saturday off.
    pub fn standard(weekday_minutes: i64) -> Self {
        Self::from_minutes([
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            0,
            0,
        ])
    }

    /// Extended week: Saturday counts as a half day.
    pub fn extended(weekday_minutes: i64, saturday_minutes: i64) -> Self {
        Self::from_minutes([
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            weekday_minutes,
            saturday_minutes,
            0,
        ])
    }

    pub fn minutes_for(&self, weekday: Weekday) -> i64 {
        self.minutes[weekday.num_days_from_monday() as usize]
    }

    /// Expected minutes for a concrete date, holiday-aware.
    pub fn expected_minutes(&self, date: NaiveDate, holidays: &HolidaySet) -> i64 {
        if holidays.contains(date) {
            0
        } else {
            self.minutes_for(date.weekday())
        }
    }
}

impl Default for WorkdaySchedule {
    /// 8h Mon-Fri, 4h Saturday, Sunday off.
    fn default() -> Self {
        Self::extended(480, 240)
    }
}

/// Externally supplied set of dates with zero expected work duration.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn from_dates(dates: &[NaiveDate]) -> Self {
        Self {
            dates: dates.iter().copied().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
