//! Slot classifier: reduces all typed punches of one employee-day to the
//! four canonical checkpoints.

use crate::models::punch::PunchEvent;
use crate::models::slots::{DaySlotRecord, SlotKind};
use chrono::{NaiveDate, NaiveTime};

/// Punches strictly before 13:00 belong to the morning bucket, the rest to
/// the afternoon bucket.
pub fn afternoon_start() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 0, 0).unwrap()
}

fn in_bucket(time: NaiveTime, morning: bool) -> bool {
    if morning {
        time < afternoon_start()
    } else {
        time >= afternoon_start()
    }
}

/// Build the `DaySlotRecord` for one employee-day.
///
/// For each slot, candidates are the punches in the matching bucket with
/// the matching direction; the winner is the one with minimal absolute
/// time-of-day distance to the slot target, ties broken by earliest
/// timestamp. A slot with no candidate stays absent.
///
/// Deterministic and idempotent: re-running on the same punch set yields
/// an identical record.
pub fn classify_day(cpf: &str, date: NaiveDate, punches: &[PunchEvent]) -> DaySlotRecord {
    let mut record = DaySlotRecord::empty(cpf, date);

    for kind in SlotKind::ALL {
        let target = kind.target();

        let best = punches
            .iter()
            .filter(|p| p.direction == kind.direction() && in_bucket(p.time(), kind.is_morning()))
            .min_by_key(|p| {
                let distance = (p.time() - target).num_seconds().abs();
                (distance, p.timestamp)
            });

        record.set(kind, best.map(|p| p.time()));
    }

    record
}
