use super::slots::SlotKind;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Append-only audit row written whenever a user overrides a classified
/// slot. The original punch history is never mutated; the correction adds
/// a new punch and this entry records what was displayed before.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionLogEntry {
    pub id: i32,
    pub cpf: String,
    pub date: NaiveDate,
    pub slot: SlotKind,
    pub old_value: String, // displayed value before the edit (may be the 00:00:00 sentinel)
    pub new_value: String, // HH:MM:SS as accepted
    pub actor: String,
    pub changed_at: String, // ISO8601
}

impl CorrectionLogEntry {
    pub fn new(
        cpf: &str,
        date: NaiveDate,
        slot: SlotKind,
        old_value: &str,
        new_value: &str,
        actor: &str,
    ) -> Self {
        Self {
            id: 0,
            cpf: cpf.to_string(),
            date,
            slot,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
            actor: actor.to_string(),
            changed_at: Local::now().to_rfc3339(),
        }
    }
}
