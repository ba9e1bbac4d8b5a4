use crate::errors::{AppError, AppResult};
use crate::models::correction::CorrectionLogEntry;
use crate::models::direction::Direction;
use crate::models::employee::Employee;
use crate::models::punch::{PunchEvent, TIMESTAMP_FORMAT};
use crate::models::slots::SlotKind;
use chrono::{DateTime, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Result, Row, ToSql};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

pub fn map_punch_row(row: &Row) -> Result<PunchEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(ts_str.clone())),
        )
    })?;

    let tipo_str: String = row.get("tipo")?;
    let direction = Direction::from_db_str(&tipo_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDirection(tipo_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        cpf: row.get("cpf")?,
        timestamp,
        direction,
        company: row.get("codigo_empresa")?,
        trailer: row.get("valor")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a punch or update the existing row with the same
/// `(cpf, timestamp)` key. Re-submitting an identical punch (or an
/// identical correction) therefore updates rather than duplicates.
pub fn upsert_punch(conn: &Connection, punch: &PunchEvent) -> AppResult<UpsertOutcome> {
    let ts = punch.timestamp_str();

    let existing: Option<i32> = conn
        .query_row(
            "SELECT id FROM punches WHERE cpf = ?1 AND timestamp = ?2",
            params![punch.cpf, ts],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => {
            conn.execute(
                "UPDATE punches
                 SET tipo = ?1, codigo_empresa = ?2, valor = ?3
                 WHERE id = ?4",
                params![
                    punch.direction.to_db_str(),
                    punch.company,
                    punch.trailer,
                    id
                ],
            )?;
            Ok(UpsertOutcome::Updated)
        }
        None => {
            conn.execute(
                "INSERT INTO punches (cpf, timestamp, tipo, codigo_empresa, valor, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    punch.cpf,
                    ts,
                    punch.direction.to_db_str(),
                    punch.company,
                    punch.trailer,
                    punch.created_at,
                ],
            )?;
            Ok(UpsertOutcome::Inserted)
        }
    }
}

pub fn load_punches_by_day(
    conn: &Connection,
    cpf: &str,
    date: NaiveDate,
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE cpf = ?1 AND substr(timestamp, 1, 10) = ?2
         ORDER BY timestamp ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![cpf, date_str], map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load all punches in `[from, to]` (by calendar date of the timestamp),
/// optionally filtered by company and/or employee.
pub fn load_punches_range(
    conn: &Connection,
    company: Option<&str>,
    cpf: Option<&str>,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<PunchEvent>> {
    let from_str = from.format("%Y-%m-%d").to_string();
    let to_str = to.format("%Y-%m-%d").to_string();

    let mut sql = String::from(
        "SELECT * FROM punches
         WHERE substr(timestamp, 1, 10) BETWEEN ?1 AND ?2",
    );
    let mut values: Vec<&dyn ToSql> = vec![&from_str, &to_str];

    if let Some(ref c) = company {
        sql.push_str(&format!(" AND codigo_empresa = ?{}", values.len() + 1));
        values.push(c);
    }
    if let Some(ref e) = cpf {
        sql.push_str(&format!(" AND cpf = ?{}", values.len() + 1));
        values.push(e);
    }
    sql.push_str(" ORDER BY cpf ASC, timestamp ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values), map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Company key of the most recent punch for an employee, if any.
pub fn latest_company_for(conn: &Connection, cpf: &str) -> AppResult<Option<String>> {
    let company = conn
        .query_row(
            "SELECT codigo_empresa FROM punches
             WHERE cpf = ?1
             ORDER BY timestamp DESC
             LIMIT 1",
            params![cpf],
            |row| row.get(0),
        )
        .optional()?;
    Ok(company)
}

pub fn upsert_employee(conn: &Connection, employee: &Employee) -> AppResult<UpsertOutcome> {
    let existing: Option<i32> = conn
        .query_row(
            "SELECT id FROM employees WHERE cpf = ?1",
            params![employee.cpf],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => {
            conn.execute(
                "UPDATE employees SET nome = ?1, codigo_empresa = ?2 WHERE id = ?3",
                params![employee.name, employee.company, id],
            )?;
            Ok(UpsertOutcome::Updated)
        }
        None => {
            conn.execute(
                "INSERT INTO employees (cpf, nome, codigo_empresa) VALUES (?1, ?2, ?3)",
                params![employee.cpf, employee.name, employee.company],
            )?;
            Ok(UpsertOutcome::Inserted)
        }
    }
}

pub fn find_employee(conn: &Connection, cpf: &str) -> AppResult<Option<Employee>> {
    let employee = conn
        .query_row(
            "SELECT cpf, nome, codigo_empresa FROM employees WHERE cpf = ?1",
            params![cpf],
            |row| {
                Ok(Employee {
                    cpf: row.get(0)?,
                    name: row.get(1)?,
                    company: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(employee)
}

pub fn load_employees(conn: &Connection, company: Option<&str>) -> AppResult<Vec<Employee>> {
    let mut sql = String::from("SELECT cpf, nome, codigo_empresa FROM employees");
    let mut values: Vec<&dyn ToSql> = Vec::new();

    if let Some(ref c) = company {
        sql.push_str(" WHERE codigo_empresa = ?1");
        values.push(c);
    }
    sql.push_str(" ORDER BY nome ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values), |row| {
        Ok(Employee {
            cpf: row.get(0)?,
            name: row.get(1)?,
            company: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append one correction entry. The table is append-only: nothing ever
/// updates or deletes these rows.
pub fn insert_correction(conn: &Connection, entry: &CorrectionLogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO correction_log (cpf, date, slot, old_value, new_value, actor, changed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.cpf,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.slot.name(),
            entry.old_value,
            entry.new_value,
            entry.actor,
            entry.changed_at,
        ],
    )?;
    Ok(())
}

pub fn load_corrections(conn: &Connection, cpf: Option<&str>) -> AppResult<Vec<CorrectionLogEntry>> {
    let mut sql = String::from(
        "SELECT id, cpf, date, slot, old_value, new_value, actor, changed_at
         FROM correction_log",
    );
    let mut values: Vec<&dyn ToSql> = Vec::new();

    if let Some(ref e) = cpf {
        sql.push_str(" WHERE cpf = ?1");
        values.push(e);
    }
    sql.push_str(" ORDER BY changed_at ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values), |row| {
        let date_str: String = row.get(2)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(date_str.clone())),
            )
        })?;

        let slot_str: String = row.get(3)?;
        let slot = SlotKind::from_name(&slot_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidSlot(slot_str.clone())),
            )
        })?;

        Ok(CorrectionLogEntry {
            id: row.get(0)?,
            cpf: row.get(1)?,
            date,
            slot,
            old_value: row.get(4)?,
            new_value: row.get(5)?,
            actor: row.get(6)?,
            changed_at: row.get(7)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
