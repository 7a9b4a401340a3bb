//! SQLite-backed key-value storage.

use crate::db::pool::DbPool;
use crate::db::storage::KeyValueStorage;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Wrap an initialized pool (see `db::initialize::init_db`).
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a database prepared by `init`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_existing(path)?))
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value: Option<String> = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}
