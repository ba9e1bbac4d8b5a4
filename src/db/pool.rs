//! SQLite connection wrapper (lightweight for interactive usage).

use crate::errors::AppResult;
use rusqlite::{Connection, Result, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Run `func` inside a scoped transaction: commit on `Ok`, rollback on
    /// any `Err` (the transaction is rolled back on drop), release on all
    /// exit paths.
    pub fn with_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
