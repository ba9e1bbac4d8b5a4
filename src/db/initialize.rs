use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// `punches` is the event store; the `(cpf, timestamp)` unique key backs
/// the import/correction upsert. `correction_log` is append-only. `log` is
/// the internal operational log table.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            cpf            TEXT NOT NULL,
            timestamp      TEXT NOT NULL,
            tipo           TEXT NOT NULL CHECK(tipo IN ('entrada','saida')),
            codigo_empresa TEXT NOT NULL DEFAULT '',
            valor          TEXT DEFAULT '',
            created_at     TEXT NOT NULL,
            UNIQUE(cpf, timestamp)
        );

        CREATE INDEX IF NOT EXISTS idx_punches_cpf_day
            ON punches(cpf, substr(timestamp, 1, 10));
        CREATE INDEX IF NOT EXISTS idx_punches_empresa
            ON punches(codigo_empresa);

        CREATE TABLE IF NOT EXISTS employees (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            cpf            TEXT NOT NULL UNIQUE,
            nome           TEXT NOT NULL,
            codigo_empresa TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS correction_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            cpf        TEXT NOT NULL,
            date       TEXT NOT NULL,
            slot       TEXT NOT NULL,
            old_value  TEXT NOT NULL,
            new_value  TEXT NOT NULL,
            actor      TEXT NOT NULL,
            changed_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
