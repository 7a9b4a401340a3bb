pub mod initialize;
pub mod kv;
pub mod migrate;
pub mod pool;
pub mod storage;

pub use kv::SqliteStorage;
pub use storage::{KeyValueStorage, MemoryStorage};
