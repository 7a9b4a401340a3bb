//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::kv_table_exists;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file at `path`.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open a database that `init` has already prepared.
    ///
    /// Fails with `NotInitialized` when the file or the key-value table is
    /// missing, instead of silently creating an empty database.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::NotInitialized(path.to_string()));
        }

        let pool = Self::new(path)?;
        if !kv_table_exists(&pool.conn)? {
            return Err(AppError::NotInitialized(path.to_string()));
        }
        Ok(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}
