pub mod balance;
pub mod expected;
pub mod worked;

use crate::models::punch::PunchEvent;
use crate::models::schedule::{HolidaySet, WorkdaySchedule};
use balance::Balance;
use chrono::NaiveDate;

/// Full accounting of one employee-day. A day with zero punches yields
/// worked = 0 and a full-shortfall balance, not an omitted result.
pub fn account_day(
    punches: &[PunchEvent],
    date: NaiveDate,
    schedule: &WorkdaySchedule,
    holidays: &HolidaySet,
) -> Balance {
    let worked = worked::worked_seconds(punches);
    let expected = expected::expected_seconds(date, schedule, holidays);
    balance::balance(worked, expected)
}
