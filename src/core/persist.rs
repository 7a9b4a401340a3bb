//! Whole-collection load and save against a key-value backend.

use crate::core::changes::Collection;
use crate::db::storage::KeyValueStorage;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read one collection. A missing key is an empty collection; a value that
/// does not parse is a hard error.
pub fn load<T, S>(storage: &S, collection: Collection) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let key = collection.key();
    match storage.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| AppError::CorruptData {
            key: key.to_string(),
            source,
        }),
    }
}

/// Serialize and write the full collection (never a delta).
pub fn save<T, S>(storage: &mut S, collection: Collection, items: &[T]) -> AppResult<()>
where
    T: Serialize,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    storage.set(collection.key(), &raw)?;
    log::debug!("persisted {} ({} item(s))", collection.key(), items.len());
    Ok(())
}
