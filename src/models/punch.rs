use super::direction::Direction;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// Timestamp layout used by the punch-clock export and by the `punches`
/// table, e.g. `2025-02-24T08:03:12-0400`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A single clock event for one employee.
///
/// Rows are immutable once persisted; the only write path that touches an
/// existing row is the correction upsert keyed by `(cpf, timestamp)`.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i32,
    pub cpf: String, // ⇔ punches.cpf (employee key)
    pub timestamp: DateTime<FixedOffset>,
    pub direction: Direction, // ⇔ punches.tipo ('entrada' | 'saida')
    pub company: String,      // ⇔ punches.codigo_empresa
    pub trailer: String,      // ⇔ punches.valor (opaque device value)
    pub created_at: String,   // ⇔ punches.created_at (ISO8601)
}

impl PunchEvent {
    /// High-level constructor for events created by import or correction.
    /// - `id = 0` (assigned by SQLite on insert)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        cpf: &str,
        timestamp: DateTime<FixedOffset>,
        direction: Direction,
        company: &str,
        trailer: &str,
    ) -> Self {
        Self {
            id: 0,
            cpf: cpf.to_string(),
            timestamp,
            direction,
            company: company.to_string(),
            trailer: trailer.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    /// The canonical string form stored in the DB and used as half of the
    /// `(cpf, timestamp)` upsert key.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
