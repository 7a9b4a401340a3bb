//! Unified application error type.
//! Store, storage backends, config and CLI handlers all return AppError so
//! that `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not initialized at {0} (run `sounddesk init` first)")]
    NotInitialized(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored value for '{key}' is corrupt: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid event type: {0} (use service, soundcheck or rehearsal)")]
    InvalidEventType(String),

    #[error("Invalid equipment status: {0} (use available, maintenance or in-use)")]
    InvalidStatus(String),

    #[error("Invalid alert type: {0} (use maintenance, schedule or general)")]
    InvalidAlertType(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Lookup errors (CLI layer only, the store treats these as no-ops)
    // ---------------------------
    #[error("No {kind} found with id {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Id prefix '{id}' matches more than one {kind}")]
    AmbiguousId { kind: &'static str, id: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
