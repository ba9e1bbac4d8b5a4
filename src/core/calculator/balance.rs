/// Worked time measured against the expected duration of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub worked_secs: i64,
    pub expected_secs: i64,
    pub overtime_secs: i64,
    pub shortfall_secs: i64,
}

pub fn balance(worked_secs: i64, expected_secs: i64) -> Balance {
    Balance {
        worked_secs,
        expected_secs,
        overtime_secs: (worked_secs - expected_secs).max(0),
        shortfall_secs: (expected_secs - worked_secs).max(0),
    }
}
