//! Schema migrations, tracked through `PRAGMA user_version`.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// (version, description, SQL). Append only.
const MIGRATIONS: &[(i32, &str, &str)] = &[(
    1,
    "create kv_store",
    r#"
    CREATE TABLE IF NOT EXISTS kv_store (
        key        TEXT PRIMARY KEY,
        value      TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
)];

pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|(v, _, _)| *v).unwrap_or(0)
}

/// Check if the `kv_store` table exists.
pub fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv_store'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Apply every migration newer than the current schema version.
/// Each step runs in its own transaction together with the version bump.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", *version)?;
        tx.commit()?;

        log::info!("applied migration {} ({})", version, description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!kv_table_exists(&conn).unwrap());

        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(kv_table_exists(&conn).unwrap());
        assert_eq!(schema_version(&conn).unwrap(), latest_version());
    }
}
