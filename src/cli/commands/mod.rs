pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod equipment;
pub mod init;
pub mod schedule;
pub mod team;

use crate::config::Config;
use crate::core::Store;
use crate::db::SqliteStorage;
use crate::errors::{AppError, AppResult};

pub type DeskStore = Store<SqliteStorage>;

/// Open the configured database and rehydrate the store.
pub fn open_store(cfg: &Config) -> AppResult<DeskStore> {
    let storage = SqliteStorage::open(&cfg.database)?;
    Store::open_default(storage)
}

/// Resolve a full id or a unique id prefix (as shown in list tables).
pub fn resolve_id<'a, I>(kind: &'static str, input: &str, ids: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.trim();
    let ids: Vec<&str> = ids.into_iter().collect();

    if ids.contains(&input) {
        return Ok(input.to_string());
    }

    let matches: Vec<&str> = if input.is_empty() {
        Vec::new()
    } else {
        ids.into_iter().filter(|id| id.starts_with(input)).collect()
    };

    match matches.as_slice() {
        [one] => Ok((*one).to_string()),
        [] => Err(AppError::NotFound {
            kind,
            id: input.to_string(),
        }),
        _ => Err(AppError::AmbiguousId {
            kind,
            id: input.to_string(),
        }),
    }
}
